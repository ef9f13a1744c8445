//! In-memory customer directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{CustomerId, DomainError, ErrorCode};
use crate::ports::{Customer, CustomerRepository};

#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        Self {
            customers: RwLock::new(customers.into_iter().map(|c| (c.id, c)).collect()),
        }
    }

    pub fn insert(&self, customer: Customer) -> Result<(), DomainError> {
        let mut customers = self.customers.write().map_err(|_| poisoned())?;
        customers.insert(customer.id, customer);
        Ok(())
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "customer table lock poisoned")
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().map_err(|_| poisoned())?;
        Ok(customers.get(&id).cloned())
    }
}
