//! A single cart line.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{ProductId, Quantity};

/// One (product, quantity) line in a cart.
///
/// A cart holds at most one item per product; duplicate adds merge
/// into the existing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    product_id: ProductId,
    quantity: Quantity,
}

impl CartItem {
    /// Create a new cart item.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: Quantity) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// Get the product ID.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Merge another add of the same product into this line.
    pub(crate) fn merge(&mut self, additional: Quantity) {
        self.quantity = self.quantity.saturating_add(additional);
    }

    /// Replace the quantity in place.
    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}
