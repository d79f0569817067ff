//! Ordering aggregates.

pub mod order;
pub mod order_line;

pub use order::{Order, PlaceOrderCommand, ReconstitutedOrderParams};
pub use order_line::OrderLine;
