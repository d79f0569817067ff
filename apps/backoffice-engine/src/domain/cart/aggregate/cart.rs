//! Cart Aggregate Root
//!
//! One mutable cart per user, created lazily on first access and
//! cleared (not deleted) after a successful checkout.

use serde::{Deserialize, Serialize};

use super::CartItem;
use crate::domain::cart::errors::CartError;
use crate::domain::shared::{ProductId, Quantity, Timestamp, UserId};

/// Cart Aggregate Root.
///
/// Invariant: at most one `CartItem` per product; insertion order of
/// distinct products is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    user_id: UserId,
    items: Vec<CartItem>,
    created_at: Timestamp,
    modified_at: Timestamp,
}

impl Cart {
    /// Create an empty cart for a user.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            user_id,
            items: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Get the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Get the cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last modification timestamp.
    #[must_use]
    pub const fn modified_at(&self) -> Timestamp {
        self.modified_at
    }

    /// Add `quantity` units of a product.
    ///
    /// If a line for the product already exists, the quantities merge
    /// by summing; otherwise a new line is appended. No stock check
    /// happens here -- availability is the caller's concern (the design
    /// is reservation-free).
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` for a zero quantity.
    pub fn add_item(&mut self, product_id: ProductId, quantity: Quantity) -> Result<(), CartError> {
        if quantity.is_zero() {
            return Err(CartError::InvalidQuantity {
                message: "Added quantity must be positive".to_string(),
            });
        }

        match self.items.iter_mut().find(|i| i.product_id() == &product_id) {
            Some(existing) => existing.merge(quantity),
            None => self.items.push(CartItem::new(product_id, quantity)),
        }
        self.touch();
        Ok(())
    }

    /// Remove the line for a product.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no line matches.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);
        if self.items.len() == before {
            return Err(CartError::ItemNotFound {
                product_id: product_id.as_str().to_string(),
            });
        }
        self.touch();
        Ok(())
    }

    /// Replace the quantity of an existing line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` for a zero quantity and `ItemNotFound`
    /// if no line matches.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<(), CartError> {
        if quantity.is_zero() {
            return Err(CartError::InvalidQuantity {
                message: "Updated quantity must be positive".to_string(),
            });
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id() == product_id)
            .ok_or_else(|| CartError::ItemNotFound {
                product_id: product_id.as_str().to_string(),
            })?;

        item.set_quantity(quantity);
        self.touch();
        Ok(())
    }

    /// Empty the cart (used after a successful checkout).
    ///
    /// The cart itself survives; only its lines are dropped.
    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.modified_at = Timestamp::now();
    }
}
