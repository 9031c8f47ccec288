use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vendo_core::{CustomerRepository, ProductRepository};
use vendo_order::{CheckoutService, OrderHistory, OrderLineRequest};
use vendo_shared::{Customer, Product};
use vendo_store::{
    Config, InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log.filter.clone())),
        )
        .init();

    let customers = Arc::new(InMemoryCustomerRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());
    let orders = Arc::new(InMemoryOrderRepository::new());

    let checkout = CheckoutService::new(customers.clone(), products.clone(), orders.clone());
    let history = OrderHistory::new(orders.clone());

    if !config.seed_demo_data {
        info!("Demo seeding disabled, nothing to do");
        return Ok(());
    }

    let ada = Customer::new("Ada Lovelace".to_string(), "ada@example.com".to_string());
    customers
        .create_customer(&ada)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let widget = Product::new("Widget".to_string(), 1000, 5);
    let sprocket = Product::new("Sprocket".to_string(), 250, 10);
    for product in [&widget, &sprocket] {
        products
            .create_product(product)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    let catalog = products.list_products().await.map_err(|e| anyhow::anyhow!(e))?;
    info!("Seeded 1 customer; catalog now holds {} product(s)", catalog.len());

    let order = checkout
        .place_order(
            ada.id,
            vec![
                OrderLineRequest {
                    product_id: widget.id,
                    quantity: 3,
                },
                OrderLineRequest {
                    product_id: sprocket.id,
                    quantity: 1,
                },
            ],
        )
        .await?;
    info!("Placed order:\n{}", serde_json::to_string_pretty(&order)?);

    // An oversized request is rejected in full, stock untouched.
    match checkout
        .place_order(
            ada.id,
            vec![OrderLineRequest {
                product_id: widget.id,
                quantity: 10,
            }],
        )
        .await
    {
        Ok(order) => warn!("Oversized order unexpectedly accepted: {}", order.id),
        Err(err) => info!("Oversized order rejected: {}", err),
    }

    let placed = history.orders_for_customer(ada.id).await.map_err(|e| anyhow::anyhow!(e))?;
    info!("Customer {} has {} order(s) on file", ada.id, placed.len());

    Ok(())
}
