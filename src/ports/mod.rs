//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the bridge and the host commerce platform. Adapters implement these ports.
//!
//! ## Pricing Ports
//!
//! - `QuotePricingAdapter` - Shipping destination, methods and totals of the current quote
//!
//! ## Catalog Ports
//!
//! - `CardCatalog` - Card brands, CVV artwork and icons known to the host
//!
//! ## Cart Ports
//!
//! - `CartRepository` - Quote persistence
//! - `CustomerRepository` - Customer lookup
//! - `StoreContext` - Current store scope

mod card_catalog;
mod cart_repository;
mod customer_repository;
mod quote_pricing;
mod store_context;

pub use card_catalog::CardCatalog;
pub use cart_repository::CartRepository;
pub use customer_repository::{Customer, CustomerRepository};
pub use quote_pricing::{QuotePricingAdapter, QuotePricingError};
pub use store_context::StoreContext;
