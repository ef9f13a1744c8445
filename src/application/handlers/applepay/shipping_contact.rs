//! ShippingContactHandler - Rates the quote for a new Apple Pay shipping contact.

use std::sync::Arc;

use crate::domain::applepay::{
    ContactRejection, NegotiationFailure, NegotiationOutcome, ShippingContact,
    ShippingMethodSelection, ShippingQuote, ADDRESS_UNSERVICEABLE_MESSAGE,
    CONTACT_FAILURE_MESSAGE,
};
use crate::ports::{QuotePricingAdapter, QuotePricingError};

/// Command carrying the contact the payment sheet submitted.
#[derive(Debug, Clone, Default)]
pub struct ShippingContactCommand {
    /// `None` when the request had no usable `shippingContact` object.
    pub contact: Option<ShippingContact>,
}

/// Handler for the shipping contact step of the negotiation.
///
/// Flow:
/// 1. Reject a missing contact or a blank required field
/// 2. Move the quote to the new destination
/// 3. Fetch shipping methods; apply the method if it is the only one
/// 4. Fetch totals and return everything to the sheet
pub struct ShippingContactHandler {
    quote_pricing: Arc<dyn QuotePricingAdapter>,
}

impl ShippingContactHandler {
    pub fn new(quote_pricing: Arc<dyn QuotePricingAdapter>) -> Self {
        Self { quote_pricing }
    }

    /// Returns `Err` only for pricing engine outages; refusals are outcomes.
    pub async fn handle(
        &self,
        cmd: ShippingContactCommand,
    ) -> Result<NegotiationOutcome, QuotePricingError> {
        let Some(contact) = cmd.contact else {
            tracing::error!("{}", ADDRESS_UNSERVICEABLE_MESSAGE);
            return Ok(NegotiationOutcome::Rejected(
                ContactRejection::address_unserviceable(),
            ));
        };

        if let Some(field) = contact.first_invalid_field() {
            tracing::info!(contact_field = field, "Shipping contact rejected: blank required field");
            return Ok(NegotiationOutcome::Rejected(ContactRejection::invalid_field(
                field,
            )));
        }

        match self.quote_for(&contact).await {
            Ok(quote) => Ok(NegotiationOutcome::Quoted(quote)),
            Err(QuotePricingError::Rejected(message)) => {
                tracing::error!("{}", message);
                Ok(NegotiationOutcome::Failed(NegotiationFailure::new(
                    message,
                    CONTACT_FAILURE_MESSAGE,
                )))
            }
            Err(err) => Err(err),
        }
    }

    async fn quote_for(&self, contact: &ShippingContact) -> Result<ShippingQuote, QuotePricingError> {
        self.quote_pricing.set_destination(contact).await?;

        let methods = self.quote_pricing.shipping_methods().await?;

        // No real choice: apply it now so the totals below already include it.
        if let [only] = methods.as_slice() {
            if only.amount.is_some() {
                self.quote_pricing
                    .set_shipping_method(&ShippingMethodSelection::Offered(only.clone()))
                    .await?;
            }
        }

        let total = self.quote_pricing.grand_total().await?;
        let line_items = self.quote_pricing.line_items().await?;

        Ok(ShippingQuote {
            shipping_methods: Some(methods),
            total,
            line_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{FailPoint, MockQuotePricing, PricingCall};
    use super::*;
    use crate::domain::applepay::{
        ContactErrorCode, LineItem, MoneyTotal, ShippingMethodOption,
    };
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};

    fn contact(value: Value) -> ShippingContact {
        match value {
            Value::Object(map) => ShippingContact::new(map),
            other => panic!("expected object, got {other}"),
        }
    }

    fn full_contact() -> ShippingContact {
        contact(json!({
            "addressLines": ["1 Infinite Loop"],
            "administrativeArea": "CA",
            "country": "United States",
            "countryCode": "US",
            "locality": "Cupertino",
            "postalCode": "95014"
        }))
    }

    fn handler(pricing: &Arc<MockQuotePricing>) -> ShippingContactHandler {
        ShippingContactHandler::new(pricing.clone())
    }

    #[tokio::test]
    async fn missing_contact_is_address_unserviceable() {
        let pricing = Arc::new(MockQuotePricing::new());

        let outcome = handler(&pricing)
            .handle(ShippingContactCommand { contact: None })
            .await
            .unwrap();

        match outcome {
            NegotiationOutcome::Rejected(rejection) => {
                assert_eq!(rejection.code, ContactErrorCode::AddressUnserviceable);
                assert_eq!(rejection.contact_field, "addressLines");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(pricing.calls().is_empty());
    }

    #[tokio::test]
    async fn blank_postal_code_is_rejected_without_touching_quote() {
        let pricing = Arc::new(MockQuotePricing::new());
        let cmd = ShippingContactCommand {
            contact: Some(contact(json!({
                "administrativeArea": "CA",
                "country": "US",
                "countryCode": "US",
                "locality": "LA",
                "postalCode": ""
            }))),
        };

        let outcome = handler(&pricing).handle(cmd).await.unwrap();

        assert_eq!(
            outcome,
            NegotiationOutcome::Rejected(ContactRejection::invalid_field("postalCode"))
        );
        assert!(pricing.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_contact_sets_destination_once_with_full_mapping() {
        let pricing = Arc::new(MockQuotePricing::new());
        let cmd = ShippingContactCommand {
            contact: Some(full_contact()),
        };

        handler(&pricing).handle(cmd).await.unwrap();

        let destinations: Vec<_> = pricing
            .calls()
            .into_iter()
            .filter(|c| matches!(c, PricingCall::SetDestination(_)))
            .collect();
        assert_eq!(destinations, vec![PricingCall::SetDestination(full_contact())]);
    }

    #[tokio::test]
    async fn single_priced_method_is_applied_before_totals() {
        let standard = ShippingMethodOption::new("standard").with_amount(dec!(5.00));
        let pricing = Arc::new(
            MockQuotePricing::new()
                .with_methods(vec![standard.clone()])
                .with_total(MoneyTotal::merchant(dec!(25.00)))
                .with_line_items(vec![
                    LineItem::new("Subtotal", dec!(20.00)),
                    LineItem::new("Shipping", dec!(5.00)),
                ]),
        );

        let outcome = handler(&pricing)
            .handle(ShippingContactCommand {
                contact: Some(full_contact()),
            })
            .await
            .unwrap();

        assert_eq!(
            pricing.calls(),
            vec![
                PricingCall::SetDestination(full_contact()),
                PricingCall::ShippingMethods,
                PricingCall::SetShippingMethod(ShippingMethodSelection::Offered(standard.clone())),
                PricingCall::GrandTotal,
                PricingCall::LineItems,
            ]
        );
        match outcome {
            NegotiationOutcome::Quoted(quote) => {
                assert_eq!(quote.shipping_methods, Some(vec![standard]));
                assert_eq!(quote.total.amount, dec!(25.00));
                assert_eq!(quote.line_items.len(), 2);
            }
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn single_method_without_amount_is_not_applied() {
        let pricing = Arc::new(
            MockQuotePricing::new().with_methods(vec![ShippingMethodOption::new("pickup")]),
        );

        handler(&pricing)
            .handle(ShippingContactCommand {
                contact: Some(full_contact()),
            })
            .await
            .unwrap();

        assert!(pricing.method_selections().is_empty());
    }

    #[tokio::test]
    async fn several_methods_are_left_for_the_shopper() {
        let pricing = Arc::new(MockQuotePricing::new().with_methods(vec![
            ShippingMethodOption::new("standard").with_amount(dec!(5)),
            ShippingMethodOption::new("express").with_amount(dec!(15)),
        ]));

        let outcome = handler(&pricing)
            .handle(ShippingContactCommand {
                contact: Some(full_contact()),
            })
            .await
            .unwrap();

        assert!(pricing.method_selections().is_empty());
        match outcome {
            NegotiationOutcome::Quoted(quote) => {
                assert_eq!(quote.shipping_methods.map(|m| m.len()), Some(2));
            }
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn no_methods_still_quotes_totals() {
        let pricing = Arc::new(MockQuotePricing::new());

        let outcome = handler(&pricing)
            .handle(ShippingContactCommand {
                contact: Some(full_contact()),
            })
            .await
            .unwrap();

        assert!(pricing.method_selections().is_empty());
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn pricing_rejection_becomes_failure_outcome() {
        let pricing = Arc::new(MockQuotePricing::new().failing_at(
            FailPoint::SetDestination,
            QuotePricingError::rejected("We do not ship to this region"),
        ));

        let outcome = handler(&pricing)
            .handle(ShippingContactCommand {
                contact: Some(full_contact()),
            })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            NegotiationOutcome::Failed(NegotiationFailure::new(
                "We do not ship to this region",
                CONTACT_FAILURE_MESSAGE
            ))
        );
    }

    #[tokio::test]
    async fn rejection_while_totalling_is_also_caught() {
        let pricing = Arc::new(MockQuotePricing::new().failing_at(
            FailPoint::GrandTotal,
            QuotePricingError::rejected("Totals could not be collected"),
        ));

        let outcome = handler(&pricing)
            .handle(ShippingContactCommand {
                contact: Some(full_contact()),
            })
            .await
            .unwrap();

        assert!(matches!(outcome, NegotiationOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn engine_outage_propagates() {
        let pricing = Arc::new(MockQuotePricing::new().failing_at(
            FailPoint::ShippingMethods,
            QuotePricingError::unavailable("connection refused"),
        ));

        let result = handler(&pricing)
            .handle(ShippingContactCommand {
                contact: Some(full_contact()),
            })
            .await;

        assert_eq!(
            result,
            Err(QuotePricingError::unavailable("connection refused"))
        );
    }
}
