//! Ordering errors.

use std::fmt;

use super::value_objects::OrderStatus;

/// Errors that can occur in the order lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Invalid state transition attempted.
    InvalidStateTransition {
        /// Current order status.
        from: OrderStatus,
        /// Attempted status.
        to: OrderStatus,
        /// Reason for failure.
        reason: String,
    },

    /// Order not found.
    NotFound {
        /// Order ID.
        order_id: String,
    },

    /// Actor does not own the order.
    Unauthorized {
        /// Order ID.
        order_id: String,
        /// Requesting user.
        user_id: String,
    },

    /// Order cannot be cancelled in its current state.
    NotCancellable {
        /// Current status.
        status: OrderStatus,
    },

    /// Checkout attempted with no cart lines.
    EmptyCart {
        /// Cart owner.
        user_id: String,
    },

    /// Invalid order parameters.
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

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStateTransition { from, to, reason } => {
                write!(
                    f,
                    "Invalid order state transition: {from} -> {to}: {reason}"
                )
            }
            Self::NotFound { order_id } => {
                write!(f, "Order not found: {order_id}")
            }
            Self::Unauthorized { order_id, user_id } => {
                write!(f, "User {user_id} does not own order {order_id}")
            }
            Self::NotCancellable { status } => {
                write!(f, "Cannot cancel order in status: {status}")
            }
            Self::EmptyCart { user_id } => {
                write!(f, "Cart for user {user_id} is empty")
            }
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid order parameter '{field}': {message}")
            }
            Self::Storage { message } => {
                write!(f, "Order storage failure: {message}")
            }
        }
    }
}

impl std::error::Error for OrderError {}
