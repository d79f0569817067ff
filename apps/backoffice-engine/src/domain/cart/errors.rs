//! Cart errors.

use std::fmt;

/// Errors that can occur in cart operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// No line for the referenced product in this cart.
    ItemNotFound {
        /// Product ID.
        product_id: String,
    },

    /// Quantity must be positive.
    InvalidQuantity {
        /// Error message.
        message: String,
    },

    /// Underlying load/save primitive failed.
    Storage {
        /// Error message from the persistence layer.
        message: String,
    },
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemNotFound { product_id } => {
                write!(f, "No cart item for product: {product_id}")
            }
            Self::InvalidQuantity { message } => {
                write!(f, "Invalid cart quantity: {message}")
            }
            Self::Storage { message } => {
                write!(f, "Cart storage failure: {message}")
            }
        }
    }
}

impl std::error::Error for CartError {}
