use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use vendo_core::{CustomerRepository, OrderRepository, ProductRepository, StockAdjustment};
use vendo_shared::{Order, OrderItem};

/// One requested line of an order: which product, and how many.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// A product that cannot cover the quantity requested from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockShortage {
    pub product_id: Uuid,
    pub name: String,
    pub available: u32,
}

impl fmt::Display for StockShortage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The product {} has only {} items left in stock.",
            self.name, self.available
        )
    }
}

fn shortage_report(shortages: &[StockShortage]) -> String {
    shortages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Customer not found.")]
    CustomerNotFound,

    #[error("Some products could not be found.")]
    ProductsNotFound,

    /// Every product short on stock is reported in one failure, one line
    /// per product.
    #[error("{}", shortage_report(.0))]
    InsufficientStock(Vec<StockShortage>),

    #[error("Invalid order request: {0}")]
    InvalidRequest(String),

    #[error("Data store failure: {0}")]
    Store(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Executes the order-creation workflow against the injected stores.
///
/// The steps run strictly in sequence and any failure aborts the remaining
/// ones. There is no rollback: a store failure after the stock write leaves
/// the decrement in place.
pub struct CheckoutService {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl CheckoutService {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Create one order for `customer_id` covering `lines`.
    ///
    /// Lines naming the same product are coalesced by summing their
    /// quantities before the catalog is consulted, so a repeated id counts
    /// once toward the existence check.
    pub async fn place_order(
        &self,
        customer_id: Uuid,
        lines: Vec<OrderLineRequest>,
    ) -> Result<Order, CheckoutError> {
        let customer = self
            .customers
            .find_customer(customer_id)
            .await?
            .ok_or(CheckoutError::CustomerNotFound)?;

        let lines = coalesce_lines(lines)?;

        let ids: Vec<Uuid> = lines.iter().map(|line| line.product_id).collect();
        let products = self.products.find_products_by_ids(&ids).await?;
        if products.len() != lines.len() {
            return Err(CheckoutError::ProductsNotFound);
        }

        let requested: HashMap<Uuid, u32> = lines
            .iter()
            .map(|line| (line.product_id, line.quantity))
            .collect();
        let requested_for = |id: &Uuid| requested.get(id).copied().unwrap_or(0);

        let shortages: Vec<StockShortage> = products
            .iter()
            .filter(|product| requested_for(&product.id) > product.quantity)
            .map(|product| StockShortage {
                product_id: product.id,
                name: product.name.clone(),
                available: product.quantity,
            })
            .collect();
        if !shortages.is_empty() {
            warn!(
                "Rejecting order for customer {}: {} product(s) short on stock",
                customer.id,
                shortages.len()
            );
            return Err(CheckoutError::InsufficientStock(shortages));
        }

        let adjustments: Vec<StockAdjustment> = products
            .iter()
            .map(|product| StockAdjustment {
                product_id: product.id,
                quantity: product.quantity - requested_for(&product.id),
            })
            .collect();
        self.products.update_quantities(&adjustments).await?;

        let mut order = Order::new(customer.id);
        for product in &products {
            order.add_item(OrderItem::new(
                product.id,
                requested_for(&product.id),
                product.price_cents,
            ));
        }
        let order_id = self.orders.create_order(&order).await?;
        info!(
            "Order {} created for customer {} with {} item(s)",
            order_id,
            customer.id,
            order.items.len()
        );

        Ok(order)
    }
}

/// Merge duplicate product ids by summing quantities, preserving the order
/// of first occurrence. Empty requests and zero quantities are rejected.
fn coalesce_lines(lines: Vec<OrderLineRequest>) -> Result<Vec<OrderLineRequest>, CheckoutError> {
    if lines.is_empty() {
        return Err(CheckoutError::InvalidRequest(
            "an order needs at least one product".to_string(),
        ));
    }
    if lines.iter().any(|line| line.quantity == 0) {
        return Err(CheckoutError::InvalidRequest(
            "product quantities must be greater than zero".to_string(),
        ));
    }

    let mut merged: Vec<OrderLineRequest> = Vec::with_capacity(lines.len());
    let mut slots: HashMap<Uuid, usize> = HashMap::new();
    for line in lines {
        match slots.get(&line.product_id) {
            Some(&slot) => merged[slot].quantity += line.quantity,
            None => {
                slots.insert(line.product_id, merged.len());
                merged.push(line);
            }
        }
    }
    Ok(merged)
}
