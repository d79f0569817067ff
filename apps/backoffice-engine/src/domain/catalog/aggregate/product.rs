//! Product Aggregate Root
//!
//! The Product aggregate owns the stock ledger: every stock mutation in
//! the system goes through `deduct` and `restore`, which keep the
//! on-hand count non-negative.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::{Money, ProductId, Quantity, Timestamp};

/// Parameters for reconstituting a Product from storage.
///
/// Used by repositories to rebuild aggregates from persisted state.
#[derive(Debug, Clone)]
pub struct ReconstitutedProductParams {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub unit_price: Money,
    /// Catalog category.
    pub category: String,
    /// Units on hand.
    pub stock: Quantity,
    /// Free-text description.
    pub description: String,
    /// Catalog registration timestamp.
    pub created_at: Timestamp,
}

/// Command to register a new catalog product.
#[derive(Debug, Clone)]
pub struct RegisterProductCommand {
    /// Display name.
    pub name: String,
    /// Unit price (non-negative).
    pub unit_price: Money,
    /// Catalog category.
    pub category: String,
    /// Initial units on hand.
    pub stock: Quantity,
    /// Free-text description.
    pub description: String,
}

impl RegisterProductCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if required parameters are missing or invalid.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidParameters {
                field: "name".to_string(),
                message: "Product name must not be empty".to_string(),
            });
        }

        self.unit_price
            .validate_unit_price()
            .map_err(|e| CatalogError::InvalidParameters {
                field: "unit_price".to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

/// Product Aggregate Root.
///
/// Invariant: `stock` is never negative and is mutated only through
/// `deduct` and `restore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Money,
    category: String,
    stock: Quantity,
    description: String,
    created_at: Timestamp,
}

impl Product {
    /// Register a new catalog product.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn register(cmd: RegisterProductCommand) -> Result<Self, CatalogError> {
        cmd.validate()?;

        Ok(Self {
            id: ProductId::generate(),
            name: cmd.name,
            unit_price: cmd.unit_price,
            category: cmd.category,
            stock: cmd.stock,
            description: cmd.description,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a product from stored state.
    ///
    /// This is a factory method for rebuilding aggregates from
    /// persistence. It bypasses registration validation, as the
    /// aggregate is being restored to a known valid state.
    #[must_use]
    pub fn reconstitute(params: ReconstitutedProductParams) -> Self {
        Self {
            id: params.id,
            name: params.name,
            unit_price: params.unit_price,
            category: params.category,
            stock: params.stock,
            description: params.description,
            created_at: params.created_at,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the product ID.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current unit price.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Get the catalog category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the units on hand.
    #[must_use]
    pub const fn stock(&self) -> Quantity {
        self.stock
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the catalog registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ========================================================================
    // Stock Ledger
    // ========================================================================

    /// Check whether `quantity` units can be deducted right now.
    ///
    /// Read-only pre-flight check; holds no reservation on stock.
    #[must_use]
    pub fn is_available(&self, quantity: Quantity) -> bool {
        !quantity.is_zero() && self.stock >= quantity
    }

    /// Deduct `quantity` units from stock.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` for a zero quantity and
    /// `InsufficientStock` when the deduction would drive stock
    /// negative.
    pub fn deduct(&mut self, quantity: Quantity) -> Result<(), CatalogError> {
        if quantity.is_zero() {
            return Err(CatalogError::InvalidQuantity {
                message: "Deduction quantity must be positive".to_string(),
            });
        }

        match self.stock.checked_sub(quantity) {
            Some(remaining) => {
                self.stock = remaining;
                Ok(())
            }
            None => Err(CatalogError::InsufficientStock {
                product_id: self.id.as_str().to_string(),
                requested: quantity,
                available: self.stock,
            }),
        }
    }

    /// Restore `quantity` units to stock (order cancellation, restock).
    ///
    /// No upper bound is enforced.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` for a zero quantity.
    pub fn restore(&mut self, quantity: Quantity) -> Result<(), CatalogError> {
        if quantity.is_zero() {
            return Err(CatalogError::InvalidQuantity {
                message: "Restore quantity must be positive".to_string(),
            });
        }

        self.stock = self.stock.saturating_add(quantity);
        Ok(())
    }

    /// Update the unit price (administrative path; existing order
    /// lines keep their price snapshots).
    ///
    /// # Errors
    ///
    /// Returns error if the new price is negative.
    pub fn set_unit_price(&mut self, unit_price: Money) -> Result<(), CatalogError> {
        unit_price
            .validate_unit_price()
            .map_err(|e| CatalogError::InvalidParameters {
                field: "unit_price".to_string(),
                message: e.to_string(),
            })?;
        self.unit_price = unit_price;
        Ok(())
    }
}
