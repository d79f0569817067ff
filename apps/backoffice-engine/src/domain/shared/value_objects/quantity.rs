//! Quantity value object for stock and order line quantities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// A whole-unit quantity (stock on hand, cart and order lines).
///
/// Retail units are indivisible, so this is an unsigned integer rather
/// than a decimal. Subtraction is checked: stock arithmetic can never
/// produce a negative count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a new Quantity.
    #[must_use]
    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    /// Zero quantity.
    pub const ZERO: Self = Self(0);

    /// Get the number of units.
    #[must_use]
    pub const fn units(&self) -> u32 {
        self.0
    }

    /// Returns true if this quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked subtraction; `None` if `rhs` exceeds `self`.
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Saturating addition (restore has no upper bound; clamp at `u32::MAX`).
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Validate as a cart/order line quantity.
    ///
    /// # Errors
    ///
    /// Returns error if the quantity is zero.
    pub fn validate_for_line(&self) -> Result<(), DomainError> {
        if self.is_zero() {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "Line quantity must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<u32> for Quantity {
    fn from(units: u32) -> Self {
        Self(units)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}
