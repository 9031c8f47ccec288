use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vendo_shared::{Customer, Order, Product};

/// One entry of a batched stock write: the product's new absolute quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// Repository trait for customer data access
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create_customer(
        &self,
        customer: &Customer,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_customer(
        &self,
        id: Uuid,
    ) -> Result<Option<Customer>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(
        &self,
        product: &Product,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_product(
        &self,
        id: Uuid,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_products(
        &self,
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>>;

    /// Fetch every product matching one of `ids`. Ids with no matching
    /// product are silently dropped from the result.
    async fn find_products_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>>;

    /// Apply a batch of absolute stock levels in one call.
    async fn update_quantities(
        &self,
        adjustments: &[StockAdjustment],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(
        &self,
        order: &Order,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_order(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_orders(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;
}
