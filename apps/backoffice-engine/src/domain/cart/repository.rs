//! Cart Repository Trait

use async_trait::async_trait;

use super::aggregate::Cart;
use super::errors::CartError;
use crate::domain::shared::UserId;

/// Repository trait for Cart persistence.
///
/// One cart per user; carts are created lazily, so absence is an
/// ordinary `Ok(None)`.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Save a cart (insert or update).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, cart: &Cart) -> Result<(), CartError>;

    /// Find the cart owned by a user.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, CartError>;
}
