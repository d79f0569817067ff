//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::OrderError;
use super::value_objects::OrderStatus;
use crate::domain::shared::{OrderId, UserId};

/// Repository trait for Order persistence.
///
/// This is a domain interface (port) implemented by infrastructure
/// adapters (flat-file, in-memory). Orders are never deleted, so the
/// trait exposes no removal operation.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Save an order (insert or update).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, order: &Order) -> Result<(), OrderError>;

    /// Find an order by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Find all orders placed by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError>;

    /// Find all orders in a given status.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError>;

    /// Load every order.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    async fn find_all(&self) -> Result<Vec<Order>, OrderError>;
}
