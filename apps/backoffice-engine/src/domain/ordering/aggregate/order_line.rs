//! A single order line with its price snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, ProductId, Quantity};

/// One line of an order.
///
/// `unit_price` is a snapshot of the catalog price at order time and
/// does not change when the catalog price later changes. Lines are
/// immutable once the order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    product_id: ProductId,
    quantity: Quantity,
    unit_price: Money,
}

impl OrderLine {
    /// Create a new order line.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: Quantity, unit_price: Money) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
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

    /// Get the unit price snapshot.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Line subtotal: `quantity * unit_price`. Derived, never stored.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn subtotal_is_quantity_times_snapshot() {
        let line = OrderLine::new(
            ProductId::new("p-1"),
            Quantity::new(3),
            Money::new(dec!(1000)),
        );
        assert_eq!(line.subtotal().amount(), dec!(3000));
    }

    #[test]
    fn subtotal_of_single_unit() {
        let line = OrderLine::new(
            ProductId::new("p-1"),
            Quantity::new(1),
            Money::new(dec!(19.99)),
        );
        assert_eq!(line.subtotal().amount(), dec!(19.99));
    }

    #[test]
    fn serde_roundtrip() {
        let line = OrderLine::new(
            ProductId::new("p-1"),
            Quantity::new(2),
            Money::new(dec!(5.50)),
        );
        let json = serde_json::to_string(&line).unwrap();
        let parsed: OrderLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }
}
