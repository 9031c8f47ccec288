use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use vendo_core::OrderRepository;
use vendo_shared::Order;

/// In-memory order store. Orders are append-only from the workflow's
/// perspective.
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(
        &self,
        order: &Order,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        Ok(order.id)
    }

    async fn get_order(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn list_orders(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let orders = self.orders.read().await;
        let mut matches: Vec<Order> = orders
            .values()
            .filter(|order| order.customer_id == customer_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendo_shared::OrderItem;

    #[tokio::test]
    async fn test_list_orders_filters_by_customer() {
        let repo = InMemoryOrderRepository::new();
        let customer_id = Uuid::new_v4();

        let mut first = Order::new(customer_id);
        first.add_item(OrderItem::new(Uuid::new_v4(), 1, 500));
        let second = Order::new(customer_id);
        let other = Order::new(Uuid::new_v4());

        repo.create_order(&first).await.unwrap();
        repo.create_order(&second).await.unwrap();
        repo.create_order(&other).await.unwrap();

        let listed = repo.list_orders(customer_id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|order| order.customer_id == customer_id));

        // Newest first.
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[tokio::test]
    async fn test_get_order_round_trip() {
        let repo = InMemoryOrderRepository::new();
        let mut order = Order::new(Uuid::new_v4());
        order.add_item(OrderItem::new(Uuid::new_v4(), 2, 250));

        let id = repo.create_order(&order).await.unwrap();
        assert_eq!(id, order.id);

        let stored = repo.get_order(order.id).await.unwrap().unwrap();
        assert_eq!(stored.items, order.items);
        assert_eq!(stored.total_cents, 500);
    }
}
