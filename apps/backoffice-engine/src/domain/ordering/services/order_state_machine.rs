//! Order State Machine Service
//!
//! Validates status transitions for the order lifecycle.

use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::value_objects::OrderStatus;

/// Order State Machine for validating transitions.
///
/// The complete transition table:
/// `PENDING -> PAID`, `PENDING -> CANCELLED`, `PAID -> SHIPPING`,
/// `PAID -> CANCELLED`, `SHIPPING -> DELIVERED`. Everything else is
/// rejected.
pub struct OrderStateMachine;

impl OrderStateMachine {
    /// Check if a state transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        matches!(
            (from, to),
            (OrderStatus::Pending, OrderStatus::Paid)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Paid, OrderStatus::Shipping)
                | (OrderStatus::Paid, OrderStatus::Cancelled)
                | (OrderStatus::Shipping, OrderStatus::Delivered)
        )
    }

    /// Validate a state transition.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is invalid.
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(OrderError::InvalidStateTransition {
                from,
                to,
                reason: Self::transition_error_reason(from, to),
            })
        }
    }

    /// Get a human-readable reason for an invalid transition.
    #[must_use]
    pub fn transition_error_reason(from: OrderStatus, to: OrderStatus) -> String {
        match from {
            OrderStatus::Delivered => {
                format!("Order is already delivered, cannot transition to {to}")
            }
            OrderStatus::Cancelled => {
                format!("Order is cancelled, cannot transition to {to}")
            }
            OrderStatus::Shipping if to == OrderStatus::Cancelled => {
                "Order already shipped, cancellation is no longer possible".to_string()
            }
            _ => format!("Invalid transition from {from} to {to}"),
        }
    }

    /// Get all valid next states from a given state.
    #[must_use]
    pub fn valid_next_states(from: OrderStatus) -> Vec<OrderStatus> {
        match from {
            OrderStatus::Pending => vec![OrderStatus::Paid, OrderStatus::Cancelled],
            OrderStatus::Paid => vec![OrderStatus::Shipping, OrderStatus::Cancelled],
            OrderStatus::Shipping => vec![OrderStatus::Delivered],
            // Terminal states
            OrderStatus::Delivered | OrderStatus::Cancelled => vec![],
        }
    }
}
