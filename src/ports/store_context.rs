//! Current storefront scope.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, StoreId};

#[async_trait]
pub trait StoreContext: Send + Sync {
    /// Store the current request is scoped to.
    async fn current_store_id(&self) -> Result<StoreId, DomainError>;
}
