//! Cart Aggregate

mod cart;
mod cart_item;

pub use cart::Cart;
pub use cart_item::CartItem;
