//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `api_router` mounts them all on one router.

pub mod applepay;
pub mod cart;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod server;

use axum::Router;

// Re-export key types for convenience
pub use applepay::{applepay_router, ApplePayAppState};
pub use cart::{cart_routes, CartAppState};
pub use error::ErrorResponse;
pub use gateway::{gateway_routes, GatewayAppState};
pub use server::with_server_layers;

/// Create the complete API router.
///
/// # Routes
/// - `POST /applepay/shippingList`
/// - `POST /applepay/shippingMethod`
/// - `GET /subscribepro/checkout-config`
/// - `POST /subscribepro/carts`
/// - `POST /subscribepro/carts/:cart_id/deactivate`
pub fn api_router(applepay: ApplePayAppState, cart: CartAppState, gateway: GatewayAppState) -> Router {
    let subscribepro = Router::new()
        .merge(cart_routes().with_state(cart))
        .merge(gateway_routes().with_state(gateway));

    Router::new()
        .merge(applepay_router().with_state(applepay))
        .nest("/subscribepro", subscribepro)
}
