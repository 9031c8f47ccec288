pub mod models;

pub use models::{Customer, Order, OrderItem, Product};
