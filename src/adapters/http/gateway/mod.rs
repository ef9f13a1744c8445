//! HTTP adapter for the gateway payment configuration.
//!
//! - `GET /subscribepro/checkout-config` - Payment form configuration

pub mod handlers;
pub mod routes;

pub use handlers::{GatewayApiError, GatewayAppState};
pub use routes::gateway_routes;
