//! In-memory quote pricing engine.
//!
//! Prices a single quote with a fixed subtotal and flat shipping rates.
//! Used by the development server and integration tests. A real deployment
//! plugs in an adapter talking to the commerce platform instead.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::applepay::{
    LineItem, MoneyTotal, ShippingContact, ShippingMethodOption, ShippingMethodSelection,
};
use crate::ports::{QuotePricingAdapter, QuotePricingError};

#[derive(Debug, Default)]
struct QuoteState {
    destination: Option<ShippingContact>,
    method: Option<ShippingMethodOption>,
}

/// Flat-rate pricing for one quote.
///
/// Thread-safe via internal `RwLock`. The last write wins.
pub struct InMemoryQuotePricing {
    subtotal: Decimal,
    rates: Vec<ShippingMethodOption>,
    /// Country codes shipped to; empty ships everywhere.
    countries: Vec<String>,
    state: RwLock<QuoteState>,
}

impl InMemoryQuotePricing {
    pub fn new(subtotal: Decimal, rates: Vec<ShippingMethodOption>) -> Self {
        Self {
            subtotal,
            rates,
            countries: Vec::new(),
            state: RwLock::new(QuoteState::default()),
        }
    }

    /// Restrict shipping to the given ISO country codes.
    pub fn shipping_only_to<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Shipping method currently applied to the quote.
    pub fn applied_method(&self) -> Result<Option<String>, QuotePricingError> {
        Ok(self.read()?.method.as_ref().map(|m| m.id.clone()))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, QuoteState>, QuotePricingError> {
        self.state
            .read()
            .map_err(|_| QuotePricingError::unavailable("quote state lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, QuoteState>, QuotePricingError> {
        self.state
            .write()
            .map_err(|_| QuotePricingError::unavailable("quote state lock poisoned"))
    }

    fn ships_to(&self, contact: &ShippingContact) -> bool {
        if self.countries.is_empty() {
            return true;
        }
        contact
            .get_str("countryCode")
            .map(|code| self.countries.iter().any(|c| c.eq_ignore_ascii_case(code)))
            .unwrap_or(false)
    }

    fn require_destination(state: &QuoteState) -> Result<(), QuotePricingError> {
        match state.destination {
            Some(_) => Ok(()),
            None => Err(QuotePricingError::rejected("Shipping address is not set.")),
        }
    }
}

#[async_trait]
impl QuotePricingAdapter for InMemoryQuotePricing {
    async fn set_destination(&self, contact: &ShippingContact) -> Result<(), QuotePricingError> {
        if !self.ships_to(contact) {
            return Err(QuotePricingError::rejected(format!(
                "We can't ship to {}.",
                contact.get_str("countryCode").unwrap_or("this address")
            )));
        }

        let mut state = self.write()?;
        state.destination = Some(contact.clone());
        Ok(())
    }

    async fn shipping_methods(&self) -> Result<Vec<ShippingMethodOption>, QuotePricingError> {
        let state = self.read()?;
        Self::require_destination(&state)?;
        Ok(self.rates.clone())
    }

    async fn set_shipping_method(
        &self,
        selection: &ShippingMethodSelection,
    ) -> Result<(), QuotePricingError> {
        let id = selection
            .identifier()
            .ok_or_else(|| QuotePricingError::rejected("Shipping method is not valid."))?;

        let rate = self
            .rates
            .iter()
            .find(|rate| rate.id == id)
            .cloned()
            .ok_or_else(|| {
                QuotePricingError::rejected(format!("Shipping method {} is not available.", id))
            })?;

        let mut state = self.write()?;
        Self::require_destination(&state)?;
        state.method = Some(rate);
        Ok(())
    }

    async fn grand_total(&self) -> Result<MoneyTotal, QuotePricingError> {
        let state = self.read()?;
        let shipping = state
            .method
            .as_ref()
            .and_then(|m| m.amount)
            .unwrap_or(Decimal::ZERO);
        Ok(MoneyTotal::merchant(self.subtotal + shipping))
    }

    async fn line_items(&self) -> Result<Vec<LineItem>, QuotePricingError> {
        let state = self.read()?;
        let mut items = vec![LineItem::new("Subtotal", self.subtotal)];
        if let Some(amount) = state.method.as_ref().and_then(|m| m.amount) {
            items.push(LineItem::new("Shipping", amount));
        }
        Ok(items)
    }
}
