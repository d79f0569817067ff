//! Cart DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::aggregate::Cart;
use crate::domain::catalog::aggregate::Product;

/// DTO for one cart line, priced against the current catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemDto {
    /// Product ID.
    pub product_id: String,
    /// Product display name, when the product still exists.
    pub product_name: Option<String>,
    /// Units in the cart.
    pub quantity: u32,
    /// Current catalog unit price, when the product still exists.
    pub unit_price: Option<Decimal>,
    /// Line subtotal at the current catalog price.
    pub subtotal: Option<Decimal>,
}

/// DTO representing a user's cart.
///
/// Cart lines carry no prices of their own; this view joins them
/// against the catalog, so prices here always reflect the catalog of
/// the moment, not any earlier snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartDto {
    /// Owning user.
    pub user_id: String,
    /// Cart lines in insertion order.
    pub items: Vec<CartItemDto>,
    /// Sum of subtotals over lines whose product still exists.
    pub total: Decimal,
}

impl CartDto {
    /// Build the view by joining cart lines against catalog products.
    ///
    /// Lines whose product is missing from `products` keep their
    /// quantity but carry no name or price.
    #[must_use]
    pub fn from_cart(cart: &Cart, products: &[Product]) -> Self {
        let mut total = Decimal::ZERO;
        let items = cart
            .items()
            .iter()
            .map(|item| {
                let product = products.iter().find(|p| p.id() == item.product_id());
                let subtotal = product.map(|p| (p.unit_price() * item.quantity()).amount());
                if let Some(amount) = subtotal {
                    total += amount;
                }
                CartItemDto {
                    product_id: item.product_id().to_string(),
                    product_name: product.map(|p| p.name().to_string()),
                    quantity: item.quantity().units(),
                    unit_price: product.map(|p| p.unit_price().amount()),
                    subtotal,
                }
            })
            .collect();

        Self {
            user_id: cart.user_id().to_string(),
            items,
            total,
        }
    }
}
