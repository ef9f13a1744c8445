//! DeactivateCartHandler - Retires a customer quote.

use std::sync::Arc;

use crate::domain::cart::CartError;
use crate::domain::foundation::CartId;
use crate::ports::CartRepository;

/// Command to deactivate a cart.
#[derive(Debug, Clone)]
pub struct DeactivateCartCommand {
    pub cart_id: CartId,
}

pub struct DeactivateCartHandler {
    carts: Arc<dyn CartRepository>,
}

impl DeactivateCartHandler {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    pub async fn handle(&self, cmd: DeactivateCartCommand) -> Result<(), CartError> {
        tracing::info!("Deactivating quote {}", cmd.cart_id);

        let mut quote = self
            .carts
            .find_by_id(cmd.cart_id)
            .await?
            .ok_or(CartError::CartNotFound(cmd.cart_id))?;

        quote.deactivate();

        tracing::info!("Persisting changed quote in quote repository");
        self.carts.save(&quote).await.map_err(|e| {
            tracing::info!("{}", e.message);
            CartError::could_not_deactivate()
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::MockCartRepository;
    use super::*;
    use crate::domain::cart::Quote;
    use crate::domain::foundation::{CustomerId, StoreId};

    fn active_quote(id: u64) -> Quote {
        let mut quote = Quote::for_customer(CustomerId::new(1), StoreId::new(1));
        quote.id = Some(CartId::new(id));
        quote
    }

    #[tokio::test]
    async fn flips_active_flag_and_persists() {
        let carts = Arc::new(MockCartRepository::with_quote(active_quote(12)));
        let handler = DeactivateCartHandler::new(carts.clone());

        handler
            .handle(DeactivateCartCommand {
                cart_id: CartId::new(12),
            })
            .await
            .unwrap();

        let saved = carts.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, Some(CartId::new(12)));
        assert!(!saved[0].is_active);
    }

    #[tokio::test]
    async fn unknown_cart_is_not_found() {
        let carts = Arc::new(MockCartRepository::new());
        let handler = DeactivateCartHandler::new(carts.clone());

        let result = handler
            .handle(DeactivateCartCommand {
                cart_id: CartId::new(404),
            })
            .await;

        assert!(matches!(result, Err(CartError::CartNotFound(_))));
        assert!(carts.saved().is_empty());
    }

    #[tokio::test]
    async fn save_failure_uses_fixed_message() {
        let carts = Arc::new(MockCartRepository::failing_save().seeded(active_quote(12)));
        let handler = DeactivateCartHandler::new(carts);

        let result = handler
            .handle(DeactivateCartCommand {
                cart_id: CartId::new(12),
            })
            .await;

        match result {
            Err(CartError::CouldNotSave(message)) => {
                assert_eq!(message, "The quote can't be deactivated. ");
            }
            other => panic!("expected CouldNotSave, got {other:?}"),
        }
    }
}
