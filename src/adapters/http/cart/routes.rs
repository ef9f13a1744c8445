//! Axum router configuration for the cart lifecycle endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_cart, deactivate_cart, CartAppState};

/// Create the cart router.
///
/// # Routes
/// - `POST /carts` - Create an empty customer cart
/// - `POST /carts/:cart_id/deactivate` - Deactivate a cart
pub fn cart_routes() -> Router<CartAppState> {
    Router::new()
        .route("/carts", post(create_cart))
        .route("/carts/:cart_id/deactivate", post(deactivate_cart))
}
