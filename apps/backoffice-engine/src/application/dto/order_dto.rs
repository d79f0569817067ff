//! Order DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::value_objects::OrderStatus;
use crate::domain::shared::Timestamp;

/// DTO for one line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineDto {
    /// Product ID.
    pub product_id: String,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price snapshot at order time.
    pub unit_price: Decimal,
    /// Line subtotal.
    pub subtotal: Decimal,
}

/// DTO representing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDto {
    /// Order ID.
    pub order_id: String,
    /// Owning user.
    pub user_id: String,
    /// Status.
    pub status: OrderStatus,
    /// Lines.
    pub lines: Vec<OrderLineDto>,
    /// Total amount.
    pub total_amount: Decimal,
    /// Shipping address.
    pub shipping_address: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Placement timestamp.
    pub order_date: Timestamp,
    /// Payment timestamp.
    pub payment_date: Option<Timestamp>,
    /// Shipment timestamp.
    pub shipping_date: Option<Timestamp>,
    /// Delivery timestamp.
    pub delivery_date: Option<Timestamp>,
}

impl OrderDto {
    /// Create from a domain Order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.id().to_string(),
            user_id: order.user_id().to_string(),
            status: order.status(),
            lines: order
                .lines()
                .iter()
                .map(|line| OrderLineDto {
                    product_id: line.product_id().to_string(),
                    quantity: line.quantity().units(),
                    unit_price: line.unit_price().amount(),
                    subtotal: line.subtotal().amount(),
                })
                .collect(),
            total_amount: order.total_amount().amount(),
            shipping_address: order.shipping_address().to_string(),
            phone_number: order.phone_number().to_string(),
            order_date: order.order_date(),
            payment_date: order.payment_date(),
            shipping_date: order.shipping_date(),
            delivery_date: order.delivery_date(),
        }
    }
}

/// Aggregate statistics over the whole order book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatisticsDto {
    /// Total number of orders ever placed.
    pub total_orders: usize,
    /// Orders awaiting payment.
    pub pending: usize,
    /// Orders paid but not shipped.
    pub paid: usize,
    /// Orders in transit.
    pub shipping: usize,
    /// Orders delivered.
    pub delivered: usize,
    /// Orders cancelled.
    pub cancelled: usize,
    /// Revenue summed over non-cancelled orders.
    pub total_revenue: Decimal,
}
