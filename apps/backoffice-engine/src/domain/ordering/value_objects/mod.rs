//! Ordering value objects.

pub mod order_status;
pub mod shipping_address;

pub use order_status::OrderStatus;
pub use shipping_address::ShippingAddress;
