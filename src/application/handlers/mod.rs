//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod applepay;
pub mod cart;
pub mod gateway;

pub use applepay::{
    ShippingContactCommand, ShippingContactHandler, ShippingMethodCommand, ShippingMethodHandler,
};
pub use cart::{
    CreateEmptyCartCommand, CreateEmptyCartHandler, DeactivateCartCommand, DeactivateCartHandler,
};
pub use gateway::{GetCheckoutConfigHandler, GetCheckoutConfigQuery};
