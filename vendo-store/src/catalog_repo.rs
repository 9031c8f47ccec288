use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use vendo_core::{ProductRepository, StockAdjustment};
use vendo_shared::Product;

/// In-memory product catalog keyed by product id.
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<Uuid, Product>>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogStoreError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create_product(
        &self,
        product: &Product,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product.id)
    }

    async fn get_product(
        &self,
        id: Uuid,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list_products(
        &self,
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_products_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>> {
        let products = self.products.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| products.get(id).cloned())
            .collect())
    }

    async fn update_quantities(
        &self,
        adjustments: &[StockAdjustment],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut products = self.products.write().await;
        for adjustment in adjustments {
            let product = products
                .get_mut(&adjustment.product_id)
                .ok_or(CatalogStoreError::NotFound(adjustment.product_id))?;
            product.quantity = adjustment.quantity;
            product.updated_at = Utc::now();
        }
        tracing::debug!("Applied {} stock adjustment(s)", adjustments.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: u32) -> Product {
        Product::new("Widget".to_string(), 1000, quantity)
    }

    #[tokio::test]
    async fn test_find_by_ids_drops_unknown_ids() {
        let repo = InMemoryProductRepository::new();
        let product = widget(5);
        repo.create_product(&product).await.unwrap();

        let found = repo
            .find_products_by_ids(&[product.id, Uuid::new_v4()])
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, product.id);
    }

    #[tokio::test]
    async fn test_update_quantities_applies_batch() {
        let repo = InMemoryProductRepository::new();
        let first = widget(5);
        let second = Product::new("Gadget".to_string(), 250, 10);
        repo.create_product(&first).await.unwrap();
        repo.create_product(&second).await.unwrap();

        repo.update_quantities(&[
            StockAdjustment {
                product_id: first.id,
                quantity: 2,
            },
            StockAdjustment {
                product_id: second.id,
                quantity: 9,
            },
        ])
        .await
        .unwrap();

        assert_eq!(repo.get_product(first.id).await.unwrap().unwrap().quantity, 2);
        assert_eq!(repo.get_product(second.id).await.unwrap().unwrap().quantity, 9);
    }

    #[tokio::test]
    async fn test_list_products_returns_whole_catalog() {
        let repo = InMemoryProductRepository::new();
        repo.create_product(&widget(5)).await.unwrap();
        repo.create_product(&Product::new("Gadget".to_string(), 400, 2))
            .await
            .unwrap();

        let listed = repo.list_products().await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_update_quantities_rejects_unknown_product() {
        let repo = InMemoryProductRepository::new();

        let result = repo
            .update_quantities(&[StockAdjustment {
                product_id: Uuid::new_v4(),
                quantity: 1,
            }])
            .await;

        assert!(result.is_err());
    }
}
