use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use vendo_core::CustomerRepository;
use vendo_shared::Customer;

/// In-memory customer store keyed by customer id.
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<Uuid, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create_customer(
        &self,
        customer: &Customer,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let mut customers = self.customers.write().await;
        customers.insert(customer.id, customer.clone());
        Ok(customer.id)
    }

    async fn find_customer(
        &self,
        id: Uuid,
    ) -> Result<Option<Customer>, Box<dyn std::error::Error + Send + Sync>> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }
}
