//! Application DTOs
//!
//! Data transfer objects for the use-case boundary.

mod cart_dto;
mod order_dto;

pub use cart_dto::{CartDto, CartItemDto};
pub use order_dto::{OrderDto, OrderLineDto, OrderStatisticsDto};
