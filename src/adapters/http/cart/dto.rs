//! HTTP DTOs for the cart lifecycle endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CartId, CustomerId};

/// Request to open an empty cart for a customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartRequest {
    pub customer_id: CustomerId,
}

/// Response carrying the id of the new cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartResponse {
    pub cart_id: CartId,
}
