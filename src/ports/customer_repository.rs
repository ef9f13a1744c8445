//! Customer lookup port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CustomerId, DomainError};

/// Host customer account, reduced to what cart creation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns `None` if no customer has this id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;
}
