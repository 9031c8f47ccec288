use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An individual product line within an order.
///
/// The price is captured from the product when the order is placed and is
/// never re-read from the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: u32,
    pub price_cents: i32,
}

impl OrderItem {
    pub fn new(product_id: Uuid, quantity: u32, price_cents: i32) -> Self {
        Self {
            product_id,
            quantity,
            price_cents,
        }
    }

    /// Line total in minor units.
    pub fn line_total_cents(&self) -> i64 {
        i64::from(self.price_cents) * i64::from(self.quantity)
    }
}

/// The record of a customer's purchase. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(customer_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            items: Vec::new(),
            total_cents: 0,
            created_at: Utc::now(),
        }
    }

    /// Add a line to the order, keeping the running total in sync.
    pub fn add_item(&mut self, item: OrderItem) {
        self.total_cents += item.line_total_cents();
        self.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_tracks_items() {
        let mut order = Order::new(Uuid::new_v4());

        order.add_item(OrderItem::new(Uuid::new_v4(), 3, 1000));
        order.add_item(OrderItem::new(Uuid::new_v4(), 1, 250));

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_cents, 3250);
    }

    #[test]
    fn test_line_total_uses_captured_price() {
        let item = OrderItem::new(Uuid::new_v4(), 4, 199);
        assert_eq!(item.line_total_cents(), 796);
    }
}
