//! HTTP adapter for the Apple Pay shipping negotiation.
//!
//! Exposes the negotiation steps the payment sheet calls while the shopper
//! edits their address and shipping choice:
//! - `POST /applepay/shippingList` - Shipping contact changed
//! - `POST /applepay/shippingMethod` - Shipping method chosen

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{ApplePayApiError, ApplePayAppState};
pub use routes::applepay_router;
