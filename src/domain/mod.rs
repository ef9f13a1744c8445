//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `applepay` - Apple Pay shipping negotiation values and outcomes
//! - `payment_profile` - Vaulted payment profiles and 3-D Secure status
//! - `gateway` - Checkout payment configuration
//! - `cart` - Customer quote lifecycle

pub mod applepay;
pub mod cart;
pub mod foundation;
pub mod gateway;
pub mod payment_profile;
