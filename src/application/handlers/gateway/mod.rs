//! Gateway configuration query handlers.

mod get_checkout_config;

pub use get_checkout_config::{GetCheckoutConfigHandler, GetCheckoutConfigQuery};
