//! HTTP DTOs for the Apple Pay shipping negotiation endpoints.
//!
//! Requests are read as loose JSON: the payment sheet decides what it sends
//! and missing or mistyped keys are handled as negotiation outcomes rather
//! than as deserialization errors. Responses use the field names the Apple Pay
//! JS integration reads, which mix camelCase and snake_case.

use serde::Serialize;
use serde_json::Value;

use crate::application::handlers::applepay::{ShippingContactCommand, ShippingMethodCommand};
use crate::domain::applepay::{
    ContactRejection, LineItem, MoneyTotal, NegotiationFailure, NegotiationOutcome,
    ShippingContact, ShippingMethodOption, ShippingQuote,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request mapping
// ════════════════════════════════════════════════════════════════════════════════

/// Builds the contact command from a `shippingList` body.
///
/// A `shippingContact` that is absent, null or not an object counts as missing.
pub fn shipping_contact_command(body: &Value) -> ShippingContactCommand {
    let contact = body
        .get("shippingContact")
        .and_then(Value::as_object)
        .cloned()
        .map(ShippingContact::new);

    ShippingContactCommand { contact }
}

/// Builds the method command from a `shippingMethod` body. Null counts as missing.
pub fn shipping_method_command(body: &Value) -> ShippingMethodCommand {
    let selection = body
        .get("shippingMethod")
        .filter(|value| !value.is_null())
        .cloned();

    ShippingMethodCommand { selection }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of every negotiation response.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum NegotiationResponse {
    Success(NegotiationSuccess),
    Failure(NegotiationFailureResponse),
}

/// Recomputed pricing after a successful step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationSuccess {
    pub success: bool,
    /// Omitted after a shipping method update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_shipping_methods: Option<Vec<ShippingMethodOption>>,
    pub new_total: MoneyTotal,
    pub new_line_items: Vec<LineItem>,
}

/// Rejection or failure. Always carries a zeroed total and empty lists so the
/// sheet can reset itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationFailureResponse {
    pub success: bool,
    #[serde(rename = "is_exception")]
    pub is_exception: bool,
    #[serde(rename = "exception_message", skip_serializing_if = "Option::is_none")]
    pub exception_message: Option<String>,
    pub error_code: String,
    pub contact_field: String,
    pub message: String,
    pub new_total: MoneyTotal,
    pub new_shipping_methods: Vec<ShippingMethodOption>,
    pub new_line_items: Vec<LineItem>,
}

impl NegotiationFailureResponse {
    fn empty(message: &str) -> Self {
        Self {
            success: false,
            is_exception: false,
            exception_message: None,
            error_code: String::new(),
            contact_field: String::new(),
            message: message.to_string(),
            new_total: MoneyTotal::zero(),
            new_shipping_methods: Vec::new(),
            new_line_items: Vec::new(),
        }
    }
}

impl From<ShippingQuote> for NegotiationSuccess {
    fn from(quote: ShippingQuote) -> Self {
        Self {
            success: true,
            new_shipping_methods: quote.shipping_methods,
            new_total: quote.total,
            new_line_items: quote.line_items,
        }
    }
}

impl From<ContactRejection> for NegotiationFailureResponse {
    fn from(rejection: ContactRejection) -> Self {
        Self {
            error_code: rejection.code.as_str().to_string(),
            contact_field: rejection.contact_field,
            ..Self::empty(rejection.message)
        }
    }
}

impl From<NegotiationFailure> for NegotiationFailureResponse {
    fn from(failure: NegotiationFailure) -> Self {
        Self {
            is_exception: true,
            exception_message: Some(failure.exception_message),
            ..Self::empty(failure.message)
        }
    }
}

impl From<NegotiationOutcome> for NegotiationResponse {
    fn from(outcome: NegotiationOutcome) -> Self {
        match outcome {
            NegotiationOutcome::Quoted(quote) => NegotiationResponse::Success(quote.into()),
            NegotiationOutcome::Rejected(rejection) => {
                NegotiationResponse::Failure(rejection.into())
            }
            NegotiationOutcome::Failed(failure) => NegotiationResponse::Failure(failure.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::applepay::{CONTACT_FAILURE_MESSAGE, METHOD_FAILURE_MESSAGE};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn contact_command_keeps_submitted_field_order() {
        let body = json!({"shippingContact": {"postalCode": "90001", "locality": "LA", "country": "US"}});
        let cmd = shipping_contact_command(&body);

        let contact = cmd.contact.unwrap();
        let keys: Vec<&str> = contact.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["postalCode", "locality", "country"]);
    }

    #[test]
    fn contact_command_treats_null_and_scalars_as_missing() {
        assert!(shipping_contact_command(&json!({})).contact.is_none());
        assert!(shipping_contact_command(&json!({"shippingContact": null})).contact.is_none());
        assert!(shipping_contact_command(&json!({"shippingContact": "US"})).contact.is_none());
        assert!(shipping_contact_command(&json!([1, 2])).contact.is_none());
    }

    #[test]
    fn method_command_passes_payload_through() {
        let cmd = shipping_method_command(&json!({"shippingMethod": {"id": "standard"}}));
        assert_eq!(cmd.selection, Some(json!({"id": "standard"})));

        let cmd = shipping_method_command(&json!({"shippingMethod": "flatrate_flatrate"}));
        assert_eq!(cmd.selection, Some(json!("flatrate_flatrate")));
    }

    #[test]
    fn method_command_treats_null_as_missing() {
        assert!(shipping_method_command(&json!({"shippingMethod": null})).selection.is_none());
        assert!(shipping_method_command(&json!({})).selection.is_none());
    }

    #[test]
    fn rejection_renders_without_exception_message() {
        let response: NegotiationResponse =
            NegotiationOutcome::Rejected(ContactRejection::invalid_field("postalCode")).into();
        let body = serde_json::to_value(response).unwrap();

        assert_eq!(
            body,
            json!({
                "success": false,
                "is_exception": false,
                "errorCode": "shippingContactInvalid",
                "contactField": "postalCode",
                "message": "Shipping Address Invalid",
                "newTotal": {"label": "MERCHANT", "amount": 0.0},
                "newShippingMethods": [],
                "newLineItems": []
            })
        );
    }

    #[test]
    fn failure_renders_exception_fields() {
        let response: NegotiationResponse = NegotiationOutcome::Failed(NegotiationFailure::new(
            "Carrier offline",
            CONTACT_FAILURE_MESSAGE,
        ))
        .into();
        let body = serde_json::to_value(response).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["is_exception"], true);
        assert_eq!(body["exception_message"], "Carrier offline");
        assert_eq!(body["errorCode"], "");
        assert_eq!(body["contactField"], "");
        assert_eq!(body["message"], CONTACT_FAILURE_MESSAGE);
        assert_eq!(body["newTotal"]["amount"], 0.0);
    }

    #[test]
    fn method_failure_uses_method_message() {
        let response: NegotiationResponse = NegotiationOutcome::Failed(NegotiationFailure::new(
            "'shippingMethod' key not set!",
            METHOD_FAILURE_MESSAGE,
        ))
        .into();
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["message"], METHOD_FAILURE_MESSAGE);
        assert_eq!(body["newLineItems"], json!([]));
    }

    #[test]
    fn success_omits_methods_after_method_update() {
        let response: NegotiationResponse = NegotiationOutcome::Quoted(ShippingQuote {
            shipping_methods: None,
            total: MoneyTotal::merchant(dec!(25.00)),
            line_items: vec![LineItem::new("Subtotal", dec!(20.00))],
        })
        .into();
        let body = serde_json::to_value(response).unwrap();

        assert_eq!(body["success"], true);
        assert!(body.get("newShippingMethods").is_none());
        assert_eq!(body["newTotal"]["amount"], 25.0);
        assert_eq!(body["newLineItems"][0]["label"], "Subtotal");
    }

    #[test]
    fn success_after_contact_lists_methods() {
        let response: NegotiationResponse = NegotiationOutcome::Quoted(ShippingQuote {
            shipping_methods: Some(vec![
                ShippingMethodOption::new("standard").with_amount(dec!(5.00))
            ]),
            total: MoneyTotal::merchant(dec!(25.00)),
            line_items: vec![],
        })
        .into();
        let body = serde_json::to_value(response).unwrap();

        assert_eq!(body["newShippingMethods"][0]["id"], "standard");
        assert_eq!(body["newShippingMethods"][0]["amount"], 5.0);
    }
}
