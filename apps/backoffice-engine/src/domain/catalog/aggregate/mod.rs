//! Product Aggregate
//!
//! The Product aggregate is the root entity for the stock ledger.

mod product;

pub use product::{Product, ReconstitutedProductParams, RegisterProductCommand};
