//! Catalog Bounded Context
//!
//! Products and their stock ledger. Stock is deducted when an order
//! commits units and restored on cancellation; the aggregate keeps the
//! on-hand count non-negative under every operation sequence.

pub mod aggregate;
pub mod errors;
pub mod repository;

pub use aggregate::{Product, ReconstitutedProductParams, RegisterProductCommand};
pub use errors::CatalogError;
pub use repository::ProductRepository;
