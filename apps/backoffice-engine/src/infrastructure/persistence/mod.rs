//! Persistence Adapters
//!
//! Implementations of the domain repository traits: flat-file adapters
//! for durable collections and in-memory adapters for carts and tests.

pub mod flat_file;
pub mod in_memory;
pub mod records;

pub use flat_file::{FlatFileOrderRepository, FlatFileProductRepository};
pub use in_memory::{InMemoryCartRepository, InMemoryOrderRepository, InMemoryProductRepository};
pub use records::RecordError;
