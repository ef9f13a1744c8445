//! CreateEmptyCartHandler - Opens a fresh quote for a registered customer.

use std::sync::Arc;

use crate::domain::cart::{CartError, Quote};
use crate::domain::foundation::{CartId, CustomerId};
use crate::ports::{CartRepository, CustomerRepository, StoreContext};

/// Command to create an empty cart.
#[derive(Debug, Clone)]
pub struct CreateEmptyCartCommand {
    pub customer_id: CustomerId,
}

/// Handler for creating empty customer carts.
///
/// The quote is scoped to the current store, marked as a non-guest
/// quote and stamped with the customer's email. If persisting fails nothing is rolled back.
pub struct CreateEmptyCartHandler {
    customers: Arc<dyn CustomerRepository>,
    carts: Arc<dyn CartRepository>,
    store: Arc<dyn StoreContext>,
}

impl CreateEmptyCartHandler {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        carts: Arc<dyn CartRepository>,
        store: Arc<dyn StoreContext>,
    ) -> Self {
        Self {
            customers,
            carts,
            store,
        }
    }

    pub async fn handle(&self, cmd: CreateEmptyCartCommand) -> Result<CartId, CartError> {
        tracing::info!("Creating empty quote for customer {}", cmd.customer_id);

        // 1. Resolve store and customer
        let store_id = self.store.current_store_id().await?;
        let customer = self
            .customers
            .find_by_id(cmd.customer_id)
            .await?
            .ok_or(CartError::CustomerNotFound(cmd.customer_id))?;

        // 2. Build the quote
        let quote = Quote::for_customer(customer.id, store_id).with_customer_email(customer.email);

        // 3. Persist
        tracing::info!("Persisting new quote");
        let cart_id = self
            .carts
            .save(&quote)
            .await
            .map_err(|e| CartError::could_not_create(e.message))?;

        tracing::info!("Created quote {}", cart_id);
        Ok(cart_id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{MockCartRepository, MockCustomerRepository, MockStore};
    use super::*;
    use crate::domain::foundation::StoreId;

    fn handler(
        customers: MockCustomerRepository,
        carts: &Arc<MockCartRepository>,
    ) -> CreateEmptyCartHandler {
        CreateEmptyCartHandler::new(
            Arc::new(customers),
            carts.clone(),
            Arc::new(MockStore(StoreId::new(2))),
        )
    }

    #[tokio::test]
    async fn creates_active_non_guest_quote_in_current_store() {
        let carts = Arc::new(MockCartRepository::new());
        let handler = handler(MockCustomerRepository::with_customer(CustomerId::new(5)), &carts);

        let cart_id = handler
            .handle(CreateEmptyCartCommand {
                customer_id: CustomerId::new(5),
            })
            .await
            .unwrap();

        let saved = carts.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, Some(cart_id));
        assert_eq!(saved[0].store_id, StoreId::new(2));
        assert_eq!(saved[0].customer_id, Some(CustomerId::new(5)));
        assert_eq!(saved[0].customer_email.as_deref(), Some("customer5@example.com"));
        assert!(!saved[0].is_guest);
        assert!(saved[0].is_active);
    }

    #[tokio::test]
    async fn unknown_customer_is_not_found() {
        let carts = Arc::new(MockCartRepository::new());
        let handler = handler(MockCustomerRepository::empty(), &carts);

        let result = handler
            .handle(CreateEmptyCartCommand {
                customer_id: CustomerId::new(99),
            })
            .await;

        assert!(matches!(result, Err(CartError::CustomerNotFound(id)) if id == CustomerId::new(99)));
        assert!(carts.saved().is_empty());
    }

    #[tokio::test]
    async fn save_failure_is_could_not_save_with_cause() {
        let carts = Arc::new(MockCartRepository::failing_save());
        let handler = handler(MockCustomerRepository::with_customer(CustomerId::new(5)), &carts);

        let result = handler
            .handle(CreateEmptyCartCommand {
                customer_id: CustomerId::new(5),
            })
            .await;

        match result {
            Err(CartError::CouldNotSave(message)) => {
                assert_eq!(message, "The quote can't be created. Simulated save failure");
            }
            other => panic!("expected CouldNotSave, got {other:?}"),
        }
    }
}
