//! Quote pricing port.
//!
//! Bridges the Apple Pay exchange to the host platform's pricing engine.
//! Every call reads or mutates the shopper's current quote; the adapter
//! decides how that quote is located (checkout session, cart id, ...).
//!
//! # Errors
//!
//! Implementations distinguish two failure kinds:
//! - `Rejected` - the engine refused the input (unknown method, region not
//!   served, ...). Handlers turn this into a `success: false` payload the
//!   payment sheet can display.
//! - `Unavailable` - the engine could not be reached or broke. Handlers let
//!   this propagate as a server error.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::applepay::{
    LineItem, MoneyTotal, ShippingContact, ShippingMethodOption, ShippingMethodSelection,
};

/// Errors from the host pricing engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuotePricingError {
    /// The engine refused the request; the message is safe to echo for diagnostics.
    #[error("{0}")]
    Rejected(String),

    #[error("Pricing engine unavailable: {0}")]
    Unavailable(String),
}

impl QuotePricingError {
    pub fn rejected(message: impl Into<String>) -> Self {
        QuotePricingError::Rejected(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        QuotePricingError::Unavailable(message.into())
    }
}

/// Port for reading and updating the shopper's quote pricing.
#[async_trait]
pub trait QuotePricingAdapter: Send + Sync {
    /// Replace the quote's shipping destination with `contact`.
    async fn set_destination(&self, contact: &ShippingContact) -> Result<(), QuotePricingError>;

    /// Shipping methods available for the current destination.
    async fn shipping_methods(&self) -> Result<Vec<ShippingMethodOption>, QuotePricingError>;

    /// Apply a shipping method to the quote and recollect totals.
    async fn set_shipping_method(
        &self,
        selection: &ShippingMethodSelection,
    ) -> Result<(), QuotePricingError>;

    /// Current grand total, labeled for the merchant.
    async fn grand_total(&self) -> Result<MoneyTotal, QuotePricingError>;

    /// Current total breakdown.
    async fn line_items(&self) -> Result<Vec<LineItem>, QuotePricingError>;
}
