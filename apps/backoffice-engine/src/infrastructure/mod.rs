//! Infrastructure Layer
//!
//! Adapters implementing the repository ports defined in the domain
//! layer, plus the dependency-injection container:
//!
//! - `persistence/`: flat-file and in-memory repository adapters
//! - `container`: wiring of config, repositories, and use cases

pub mod container;
pub mod persistence;

pub use container::{Container, FileBackedContainer, InMemoryContainer};
