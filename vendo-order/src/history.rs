use std::sync::Arc;

use uuid::Uuid;

use vendo_core::OrderRepository;
use vendo_shared::Order;

/// Read side of the order store: lookups and per-customer listings.
pub struct OrderHistory {
    orders: Arc<dyn OrderRepository>,
}

impl OrderHistory {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn order(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        self.orders.get_order(id).await
    }

    /// Orders for one customer, newest first.
    pub async fn orders_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        self.orders.list_orders(customer_id).await
    }
}
