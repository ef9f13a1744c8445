//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the host quote; query handlers only read.

pub mod handlers;

pub use handlers::{
    CreateEmptyCartCommand, CreateEmptyCartHandler, DeactivateCartCommand, DeactivateCartHandler,
    GetCheckoutConfigHandler, GetCheckoutConfigQuery, ShippingContactCommand,
    ShippingContactHandler, ShippingMethodCommand, ShippingMethodHandler,
};
