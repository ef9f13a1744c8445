//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `http` - axum routers for the storefront endpoints
//! - `memory` - In-memory ports for development and tests

pub mod http;
pub mod memory;

pub use self::http::{
    api_router, with_server_layers, ApplePayAppState, CartAppState, GatewayAppState,
};
pub use memory::{
    InMemoryCartRepository, InMemoryCustomerRepository, InMemoryQuotePricing, StaticCardCatalog,
    StaticStoreContext,
};
