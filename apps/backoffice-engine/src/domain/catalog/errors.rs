//! Catalog and stock ledger errors.

use std::fmt;

use crate::domain::shared::Quantity;

/// Errors that can occur in catalog and stock operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Referenced product id has no catalog entry.
    ProductNotFound {
        /// Product ID.
        product_id: String,
    },

    /// Deduction would drive stock negative.
    InsufficientStock {
        /// Product ID.
        product_id: String,
        /// Quantity requested.
        requested: Quantity,
        /// Quantity available.
        available: Quantity,
    },

    /// Deduct/restore called with a non-positive quantity.
    InvalidQuantity {
        /// Error message.
        message: String,
    },

    /// Invalid product parameters.
    InvalidParameters {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Underlying load/save primitive failed.
    Storage {
        /// Error message from the persistence layer.
        message: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProductNotFound { product_id } => {
                write!(f, "Product not found: {product_id}")
            }
            Self::InsufficientStock {
                product_id,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient stock for {product_id}: requested {requested}, available {available}"
                )
            }
            Self::InvalidQuantity { message } => {
                write!(f, "Invalid stock quantity: {message}")
            }
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid product parameter '{field}': {message}")
            }
            Self::Storage { message } => {
                write!(f, "Catalog storage failure: {message}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
