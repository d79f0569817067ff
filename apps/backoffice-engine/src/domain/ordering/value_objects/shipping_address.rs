//! Shipping address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A free-text shipping address.
///
/// The back-office stores the address as a single line; the only
/// domain rule is that it must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingAddress(String);

impl ShippingAddress {
    /// Create a validated shipping address.
    ///
    /// # Errors
    ///
    /// Returns error if the address is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                field: "shipping_address".to_string(),
                message: "Shipping address must not be empty".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShippingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ShippingAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
