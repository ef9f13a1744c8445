//! Quote (cart) record managed by the host commerce platform.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CartId, CustomerId, StoreId};

/// The slice of a host quote the cart lifecycle service touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Assigned by the repository on first save.
    pub id: Option<CartId>,
    pub store_id: StoreId,
    pub customer_id: Option<CustomerId>,
    /// Copied from the customer when the quote is assigned.
    pub customer_email: Option<String>,
    pub is_guest: bool,
    pub is_active: bool,
}

impl Quote {
    /// Creates an unsaved, active quote owned by a registered customer.
    pub fn for_customer(customer_id: CustomerId, store_id: StoreId) -> Self {
        Self {
            id: None,
            store_id,
            customer_id: Some(customer_id),
            customer_email: None,
            is_guest: false,
            is_active: true,
        }
    }

    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Takes the quote out of circulation. It stays persisted for order history.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
