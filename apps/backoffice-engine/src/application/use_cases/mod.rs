//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod cancel_order;
mod manage_cart;
mod order_queries;
mod place_order;
mod update_order_status;

pub use cancel_order::CancelOrderUseCase;
pub use manage_cart::ManageCartUseCase;
pub use order_queries::OrderQueriesUseCase;
pub use place_order::PlaceOrderUseCase;
pub use update_order_status::UpdateOrderStatusUseCase;
