//! Ordering Bounded Context
//!
//! The order aggregate, its status state machine, and the repository
//! port. An order freezes unit prices at placement and walks a fixed
//! lifecycle; terminal states are never left.

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{Order, OrderLine, PlaceOrderCommand, ReconstitutedOrderParams};
pub use errors::OrderError;
pub use repository::OrderRepository;
pub use services::OrderStateMachine;
pub use value_objects::{OrderStatus, ShippingAddress};
