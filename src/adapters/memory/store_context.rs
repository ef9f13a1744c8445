//! Fixed store scope for single-store deployments.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, StoreId};
use crate::ports::StoreContext;

pub const DEFAULT_STORE_ID: u64 = 1;

#[derive(Debug, Clone, Copy)]
pub struct StaticStoreContext(StoreId);

impl StaticStoreContext {
    pub fn new(store_id: StoreId) -> Self {
        Self(store_id)
    }
}

impl Default for StaticStoreContext {
    fn default() -> Self {
        Self(StoreId::new(DEFAULT_STORE_ID))
    }
}

#[async_trait]
impl StoreContext for StaticStoreContext {
    async fn current_store_id(&self) -> Result<StoreId, DomainError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_store() {
        let store = StaticStoreContext::new(StoreId::new(4));
        assert_eq!(store.current_store_id().await.unwrap(), StoreId::new(4));
        assert_eq!(
            StaticStoreContext::default().current_store_id().await.unwrap(),
            StoreId::new(1)
        );
    }
}
