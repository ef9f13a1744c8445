//! Axum router configuration for the Apple Pay negotiation endpoints.

use axum::{middleware, routing::post, Router};

use super::handlers::{shipping_list, shipping_method, ApplePayAppState};
use crate::adapters::http::middleware::require_post;

/// Create the Apple Pay negotiation router.
///
/// # Routes
/// - `POST /applepay/shippingList` - Shipping contact changed
/// - `POST /applepay/shippingMethod` - Shipping method chosen
///
/// Every other method on these paths gets the `401` guard response.
pub fn applepay_router() -> Router<ApplePayAppState> {
    Router::new()
        .route("/applepay/shippingList", post(shipping_list))
        .route("/applepay/shippingMethod", post(shipping_method))
        .route_layer(middleware::from_fn(require_post))
}
