//! Order Aggregate Root
//!
//! The Order aggregate manages the order lifecycle: identity, line
//! items with price snapshots, the status state machine, and the
//! lifecycle timestamps each transition stamps.

use serde::{Deserialize, Serialize};

use super::OrderLine;
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::services::OrderStateMachine;
use crate::domain::ordering::value_objects::{OrderStatus, ShippingAddress};
use crate::domain::shared::{Money, OrderId, Timestamp, UserId};

/// Parameters for reconstituting an Order from storage.
///
/// Used by repositories to rebuild aggregates from persisted state.
#[derive(Debug, Clone)]
pub struct ReconstitutedOrderParams {
    /// Order identifier.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Current status.
    pub status: OrderStatus,
    /// Order lines.
    pub lines: Vec<OrderLine>,
    /// Persisted total amount.
    pub total_amount: Money,
    /// Shipping address.
    pub shipping_address: ShippingAddress,
    /// Contact phone number.
    pub phone_number: String,
    /// Placement timestamp.
    pub order_date: Timestamp,
    /// Payment timestamp, if paid.
    pub payment_date: Option<Timestamp>,
    /// Shipment timestamp, if shipped.
    pub shipping_date: Option<Timestamp>,
    /// Delivery timestamp, if delivered.
    pub delivery_date: Option<Timestamp>,
}

/// Command to place a new order.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    /// Owning user.
    pub user_id: UserId,
    /// Order lines (non-empty, each with positive quantity).
    pub lines: Vec<OrderLine>,
    /// Shipping address.
    pub shipping_address: ShippingAddress,
    /// Contact phone number.
    pub phone_number: String,
}

impl PlaceOrderCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if the order has no lines or a line has a zero
    /// quantity.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.lines.is_empty() {
            return Err(OrderError::InvalidParameters {
                field: "lines".to_string(),
                message: "An order must have at least one line".to_string(),
            });
        }

        if self.phone_number.trim().is_empty() {
            return Err(OrderError::InvalidParameters {
                field: "phone_number".to_string(),
                message: "Contact phone number must not be empty".to_string(),
            });
        }

        for line in &self.lines {
            line.quantity()
                .validate_for_line()
                .map_err(|e| OrderError::InvalidParameters {
                    field: "quantity".to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }
}

/// Order Aggregate Root.
///
/// Invariant: `total_amount` always equals the sum of line subtotals.
/// Orders are never deleted; terminal states end the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    status: OrderStatus,
    lines: Vec<OrderLine>,
    total_amount: Money,
    shipping_address: ShippingAddress,
    phone_number: String,
    order_date: Timestamp,
    payment_date: Option<Timestamp>,
    shipping_date: Option<Timestamp>,
    delivery_date: Option<Timestamp>,
}

impl Order {
    /// Place a new order in `PENDING` status.
    ///
    /// The total is computed from the line subtotals.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn place(cmd: PlaceOrderCommand) -> Result<Self, OrderError> {
        cmd.validate()?;

        let total_amount = Self::sum_lines(&cmd.lines);

        Ok(Self {
            id: OrderId::generate(),
            user_id: cmd.user_id,
            status: OrderStatus::Pending,
            lines: cmd.lines,
            total_amount,
            shipping_address: cmd.shipping_address,
            phone_number: cmd.phone_number,
            order_date: Timestamp::now(),
            payment_date: None,
            shipping_date: None,
            delivery_date: None,
        })
    }

    /// Reconstitute an order from stored state.
    ///
    /// Bypasses placement validation; the aggregate is being restored
    /// to a known valid state.
    #[must_use]
    pub fn reconstitute(params: ReconstitutedOrderParams) -> Self {
        Self {
            id: params.id,
            user_id: params.user_id,
            status: params.status,
            lines: params.lines,
            total_amount: params.total_amount,
            shipping_address: params.shipping_address,
            phone_number: params.phone_number,
            order_date: params.order_date,
            payment_date: params.payment_date,
            shipping_date: params.shipping_date,
            delivery_date: params.delivery_date,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the order lines.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Get the total amount.
    #[must_use]
    pub const fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Get the shipping address.
    #[must_use]
    pub const fn shipping_address(&self) -> &ShippingAddress {
        &self.shipping_address
    }

    /// Get the contact phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Get the placement timestamp.
    #[must_use]
    pub const fn order_date(&self) -> Timestamp {
        self.order_date
    }

    /// Get the payment timestamp, if paid.
    #[must_use]
    pub const fn payment_date(&self) -> Option<Timestamp> {
        self.payment_date
    }

    /// Get the shipment timestamp, if shipped.
    #[must_use]
    pub const fn shipping_date(&self) -> Option<Timestamp> {
        self.shipping_date
    }

    /// Get the delivery timestamp, if delivered.
    #[must_use]
    pub const fn delivery_date(&self) -> Option<Timestamp> {
        self.delivery_date
    }

    /// Check the total invariant against the current lines.
    #[must_use]
    pub fn total_matches_lines(&self) -> bool {
        self.total_amount == Self::sum_lines(&self.lines)
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Apply a status transition, stamping the matching timestamp.
    ///
    /// Stock restoration on cancellation is the orchestration layer's
    /// job; the aggregate only moves the status.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is not in the state machine's
    /// table.
    pub fn transition_to(&mut self, new_status: OrderStatus) -> Result<(), OrderError> {
        OrderStateMachine::validate_transition(self.status, new_status)?;

        let now = Timestamp::now();
        match new_status {
            OrderStatus::Paid => self.payment_date = Some(now),
            OrderStatus::Shipping => self.shipping_date = Some(now),
            OrderStatus::Delivered => self.delivery_date = Some(now),
            OrderStatus::Pending | OrderStatus::Cancelled => {}
        }
        self.status = new_status;

        Ok(())
    }

    /// Mark the order paid.
    ///
    /// # Errors
    ///
    /// Returns error unless the order is `PENDING`.
    pub fn mark_paid(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Paid)
    }

    /// Mark the order shipped.
    ///
    /// # Errors
    ///
    /// Returns error unless the order is `PAID`.
    pub fn mark_shipped(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Shipping)
    }

    /// Mark the order delivered.
    ///
    /// # Errors
    ///
    /// Returns error unless the order is `SHIPPING`.
    pub fn mark_delivered(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Delivered)
    }

    /// Cancel the order.
    ///
    /// # Errors
    ///
    /// Returns error unless the order is `PENDING` or `PAID`.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Cancelled)
    }

    fn sum_lines(lines: &[OrderLine]) -> Money {
        lines
            .iter()
            .fold(Money::ZERO, |acc, line| acc + line.subtotal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{ProductId, Quantity};
    use rust_decimal_macros::dec;

    fn make_command() -> PlaceOrderCommand {
        PlaceOrderCommand {
            user_id: UserId::new("user-1"),
            lines: vec![
                OrderLine::new(
                    ProductId::new("p-1"),
                    Quantity::new(3),
                    Money::new(dec!(1000)),
                ),
                OrderLine::new(
                    ProductId::new("p-2"),
                    Quantity::new(1),
                    Money::new(dec!(250)),
                ),
            ],
            shipping_address: ShippingAddress::new("1 Main St").unwrap(),
            phone_number: "555-0100".to_string(),
        }
    }

    #[test]
    fn place_starts_pending_with_computed_total() {
        let order = Order::place(make_command()).unwrap();

        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.total_amount().amount(), dec!(3250));
        assert!(order.total_matches_lines());
        assert!(order.payment_date().is_none());
        assert!(order.shipping_date().is_none());
        assert!(order.delivery_date().is_none());
    }

    #[test]
    fn place_rejects_empty_lines() {
        let mut cmd = make_command();
        cmd.lines.clear();

        assert!(matches!(
            Order::place(cmd),
            Err(OrderError::InvalidParameters { ref field, .. }) if field == "lines"
        ));
    }

    #[test]
    fn place_rejects_zero_quantity_line() {
        let mut cmd = make_command();
        cmd.lines.push(OrderLine::new(
            ProductId::new("p-3"),
            Quantity::ZERO,
            Money::new(dec!(10)),
        ));

        assert!(matches!(
            Order::place(cmd),
            Err(OrderError::InvalidParameters { ref field, .. }) if field == "quantity"
        ));
    }

    #[test]
    fn total_tracks_price_snapshots_not_catalog() {
        // The total is fixed at placement; there is no path that
        // mutates lines afterwards.
        let order = Order::place(make_command()).unwrap();
        assert_eq!(
            order.total_amount(),
            order
                .lines()
                .iter()
                .fold(Money::ZERO, |acc, l| acc + l.subtotal())
        );
    }

    #[test]
    fn full_lifecycle_stamps_timestamps() {
        let mut order = Order::place(make_command()).unwrap();

        order.mark_paid().unwrap();
        assert_eq!(order.status(), OrderStatus::Paid);
        assert!(order.payment_date().is_some());

        order.mark_shipped().unwrap();
        assert_eq!(order.status(), OrderStatus::Shipping);
        assert!(order.shipping_date().is_some());

        order.mark_delivered().unwrap();
        assert_eq!(order.status(), OrderStatus::Delivered);
        assert!(order.delivery_date().is_some());
    }

    #[test]
    fn cancel_from_pending() {
        let mut order = Order::place(make_command()).unwrap();
        order.cancel().unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn cancel_from_paid() {
        let mut order = Order::place(make_command()).unwrap();
        order.mark_paid().unwrap();
        order.cancel().unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn cancel_fails_after_shipment() {
        let mut order = Order::place(make_command()).unwrap();
        order.mark_paid().unwrap();
        order.mark_shipped().unwrap();

        assert!(matches!(
            order.cancel(),
            Err(OrderError::InvalidStateTransition { .. })
        ));
        assert_eq!(order.status(), OrderStatus::Shipping);
    }

    #[test]
    fn second_cancel_fails() {
        let mut order = Order::place(make_command()).unwrap();
        order.cancel().unwrap();

        assert!(matches!(
            order.cancel(),
            Err(OrderError::InvalidStateTransition { .. })
        ));
    }

    #[test]
    fn delivered_directly_from_pending_is_rejected() {
        let mut order = Order::place(make_command()).unwrap();

        let result = order.transition_to(OrderStatus::Delivered);
        assert!(matches!(
            result,
            Err(OrderError::InvalidStateTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Delivered,
                ..
            })
        ));
        // Failed transition leaves the order untouched
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.delivery_date().is_none());
    }

    #[test]
    fn reconstitute_restores_state() {
        let order_date = Timestamp::parse_ledger("2026-02-01 10:00:00").unwrap();
        let payment_date = Timestamp::parse_ledger("2026-02-01 10:05:00").unwrap();
        let lines = vec![OrderLine::new(
            ProductId::new("p-1"),
            Quantity::new(2),
            Money::new(dec!(500)),
        )];

        let order = Order::reconstitute(ReconstitutedOrderParams {
            id: OrderId::new("ord-recon"),
            user_id: UserId::new("user-1"),
            status: OrderStatus::Paid,
            lines,
            total_amount: Money::new(dec!(1000)),
            shipping_address: ShippingAddress::new("1 Main St").unwrap(),
            phone_number: "555-0100".to_string(),
            order_date,
            payment_date: Some(payment_date),
            shipping_date: None,
            delivery_date: None,
        });

        assert_eq!(order.id().as_str(), "ord-recon");
        assert_eq!(order.status(), OrderStatus::Paid);
        assert_eq!(order.payment_date(), Some(payment_date));
        assert!(order.total_matches_lines());
    }

    #[test]
    fn serde_roundtrip() {
        let order = Order::place(make_command()).unwrap();

        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id(), order.id());
        assert_eq!(parsed.status(), order.status());
        assert_eq!(parsed.total_amount(), order.total_amount());
        assert_eq!(parsed.lines(), order.lines());
    }
}
