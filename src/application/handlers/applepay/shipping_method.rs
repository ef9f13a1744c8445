//! ShippingMethodHandler - Applies the shopper's shipping method choice.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::applepay::{
    NegotiationFailure, NegotiationOutcome, ShippingMethodSelection, ShippingQuote,
    METHOD_FAILURE_MESSAGE, MISSING_SHIPPING_METHOD_MESSAGE,
};
use crate::ports::{QuotePricingAdapter, QuotePricingError};

/// Command carrying the `shippingMethod` payload from the payment sheet.
#[derive(Debug, Clone, Default)]
pub struct ShippingMethodCommand {
    /// `None` when the request had no `shippingMethod` key.
    pub selection: Option<Value>,
}

pub struct ShippingMethodHandler {
    quote_pricing: Arc<dyn QuotePricingAdapter>,
}

impl ShippingMethodHandler {
    pub fn new(quote_pricing: Arc<dyn QuotePricingAdapter>) -> Self {
        Self { quote_pricing }
    }

    /// Returns `Err` only for pricing engine outages; refusals are outcomes.
    pub async fn handle(
        &self,
        cmd: ShippingMethodCommand,
    ) -> Result<NegotiationOutcome, QuotePricingError> {
        let Some(payload) = cmd.selection else {
            return Ok(Self::failed(MISSING_SHIPPING_METHOD_MESSAGE.to_string()));
        };

        match self.apply(ShippingMethodSelection::Client(payload)).await {
            Ok(quote) => Ok(NegotiationOutcome::Quoted(quote)),
            Err(QuotePricingError::Rejected(message)) => Ok(Self::failed(message)),
            Err(err) => Err(err),
        }
    }

    async fn apply(
        &self,
        selection: ShippingMethodSelection,
    ) -> Result<ShippingQuote, QuotePricingError> {
        self.quote_pricing.set_shipping_method(&selection).await?;

        let total = self.quote_pricing.grand_total().await?;
        let line_items = self.quote_pricing.line_items().await?;

        Ok(ShippingQuote {
            shipping_methods: None,
            total,
            line_items,
        })
    }

    fn failed(message: String) -> NegotiationOutcome {
        tracing::error!("{}", message);
        NegotiationOutcome::Failed(NegotiationFailure::new(message, METHOD_FAILURE_MESSAGE))
    }
}
