//! In-memory cart repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::cart::Quote;
use crate::domain::foundation::{CartId, DomainError, ErrorCode};
use crate::ports::CartRepository;

const FIRST_CART_ID: u64 = 1;

#[derive(Debug)]
struct CartTable {
    quotes: HashMap<CartId, Quote>,
    next_id: u64,
}

/// In-memory implementation of the `CartRepository` port.
///
/// Ids are assigned sequentially on first save. Nothing survives a restart.
#[derive(Debug)]
pub struct InMemoryCartRepository {
    table: RwLock<CartTable>,
}

impl Default for InMemoryCartRepository {
    fn default() -> Self {
        Self {
            table: RwLock::new(CartTable {
                quotes: HashMap::new(),
                next_id: FIRST_CART_ID,
            }),
        }
    }
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "cart table lock poisoned")
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn find_by_id(&self, id: CartId) -> Result<Option<Quote>, DomainError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.quotes.get(&id).cloned())
    }

    async fn save(&self, quote: &Quote) -> Result<CartId, DomainError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;

        let id = match quote.id {
            Some(id) => id,
            None => {
                let id = CartId::new(table.next_id);
                table.next_id += 1;
                id
            }
        };

        let mut stored = quote.clone();
        stored.id = Some(id);
        table.quotes.insert(id, stored);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CustomerId, StoreId};

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryCartRepository::new();
        let quote = Quote::for_customer(CustomerId::new(1), StoreId::new(1));

        assert_eq!(repo.save(&quote).await.unwrap(), CartId::new(1));
        assert_eq!(repo.save(&quote).await.unwrap(), CartId::new(2));
    }

    #[tokio::test]
    async fn save_with_id_updates_in_place() {
        let repo = InMemoryCartRepository::new();
        let id = repo
            .save(&Quote::for_customer(CustomerId::new(1), StoreId::new(1)))
            .await
            .unwrap();

        let mut quote = repo.find_by_id(id).await.unwrap().unwrap();
        quote.deactivate();
        assert_eq!(repo.save(&quote).await.unwrap(), id);

        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert!(!stored.is_active);
        assert_eq!(stored.id, Some(id));
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let repo = InMemoryCartRepository::new();
        assert!(repo.find_by_id(CartId::new(5)).await.unwrap().is_none());
    }
}
