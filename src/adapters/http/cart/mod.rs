//! HTTP adapter for the customer cart lifecycle.
//!
//! - `POST /subscribepro/carts` - Create an empty cart for a customer
//! - `POST /subscribepro/carts/:cart_id/deactivate` - Deactivate a cart

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{CartApiError, CartAppState};
pub use routes::cart_routes;
