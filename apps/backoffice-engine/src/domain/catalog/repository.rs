//! Product Repository Trait
//!
//! Defines the persistence abstraction for catalog products.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Product;
use super::errors::CatalogError;
use crate::domain::shared::ProductId;

/// Repository trait for Product persistence.
///
/// This is a domain interface (port) implemented by infrastructure
/// adapters (flat-file, in-memory). Adapters follow the gateway's
/// full-collection read/rewrite contract: every save loads the whole
/// collection, replaces one record, and writes the collection back.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Save a product (insert or update).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, product: &Product) -> Result<(), CatalogError>;

    /// Find a product by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// Load the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    async fn find_all(&self) -> Result<Vec<Product>, CatalogError>;

    /// Check if a product exists.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    async fn exists(&self, id: &ProductId) -> Result<bool, CatalogError>;
}
