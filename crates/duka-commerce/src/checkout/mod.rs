//! Checkout types: the order record placed from a cart.

mod order;

pub use order::{Order, OrderStatus};
