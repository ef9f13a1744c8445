//! Axum router configuration for the gateway configuration endpoint.

use axum::{routing::get, Router};

use super::handlers::{get_checkout_config, GatewayAppState};

/// Create the gateway router.
///
/// # Routes
/// - `GET /checkout-config` - Payment form configuration
pub fn gateway_routes() -> Router<GatewayAppState> {
    Router::new().route("/checkout-config", get(get_checkout_config))
}
