//! SubscribePro Checkout - storefront endpoints of the SubscribePro payment bridge
//!
//! This crate negotiates Apple Pay shipping contacts and methods against the
//! host quote, serves the gateway checkout configuration, and creates or
//! retires customer carts on behalf of SubscribePro.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
