pub mod repository;

pub use repository::{CustomerRepository, OrderRepository, ProductRepository, StockAdjustment};
