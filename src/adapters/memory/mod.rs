//! In-memory adapters for development and integration testing.
//!
//! Thread-safe via internal `RwLock`s. Nothing is persisted across restarts;
//! production deployments implement the ports against the commerce platform.

mod card_catalog;
mod cart_repository;
mod customer_repository;
mod quote_pricing;
mod store_context;

pub use card_catalog::StaticCardCatalog;
pub use cart_repository::InMemoryCartRepository;
pub use customer_repository::InMemoryCustomerRepository;
pub use quote_pricing::InMemoryQuotePricing;
pub use store_context::{StaticStoreContext, DEFAULT_STORE_ID};
