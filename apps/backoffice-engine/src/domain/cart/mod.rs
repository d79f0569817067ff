//! Cart Bounded Context
//!
//! Per-user mutable carts. Duplicate adds merge by summing quantities;
//! the design is reservation-free, so stock can still run out between
//! cart-add and checkout.

pub mod aggregate;
pub mod errors;
pub mod repository;

pub use aggregate::{Cart, CartItem};
pub use errors::CartError;
pub use repository::CartRepository;
