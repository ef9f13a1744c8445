//! Result of one shipping negotiation step.
//!
//! Validation failures and pricing rejections are ordinary outcomes the
//! Apple Pay sheet knows how to display, not errors. The HTTP layer renders
//! every variant as a `200` JSON document.

use super::pricing::{LineItem, MoneyTotal, ShippingMethodOption};

pub const ADDRESS_UNSERVICEABLE_MESSAGE: &str = "Please select a different address";
pub const SHIPPING_CONTACT_INVALID_MESSAGE: &str = "Shipping Address Invalid";
pub const CONTACT_FAILURE_MESSAGE: &str =
    "Something went wrong. Please contact support for assistance.";
pub const METHOD_FAILURE_MESSAGE: &str =
    "Shipping method error. Please select a different shipping method.";
pub const MISSING_SHIPPING_METHOD_MESSAGE: &str = "'shippingMethod' key not set!";

/// Contact field Apple Pay highlights when the whole address is unusable.
pub const ADDRESS_LINES_FIELD: &str = "addressLines";

/// Apple Pay error codes used when rejecting a shipping contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactErrorCode {
    AddressUnserviceable,
    ShippingContactInvalid,
}

impl ContactErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactErrorCode::AddressUnserviceable => "addressUnserviceable",
            ContactErrorCode::ShippingContactInvalid => "shippingContactInvalid",
        }
    }
}

/// Shipping contact refused before the quote was touched.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRejection {
    pub code: ContactErrorCode,
    pub contact_field: String,
    pub message: &'static str,
}

impl ContactRejection {
    /// The request carried no shipping contact at all.
    pub fn address_unserviceable() -> Self {
        Self {
            code: ContactErrorCode::AddressUnserviceable,
            contact_field: ADDRESS_LINES_FIELD.to_string(),
            message: ADDRESS_UNSERVICEABLE_MESSAGE,
        }
    }

    /// A required address field was submitted blank.
    pub fn invalid_field(field: impl Into<String>) -> Self {
        Self {
            code: ContactErrorCode::ShippingContactInvalid,
            contact_field: field.into(),
            message: SHIPPING_CONTACT_INVALID_MESSAGE,
        }
    }
}

/// The pricing engine refused the request.
///
/// `exception_message` is the engine's own wording, echoed for diagnostics;
/// `message` is the fixed text shown to the shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct NegotiationFailure {
    pub exception_message: String,
    pub message: &'static str,
}

impl NegotiationFailure {
    pub fn new(exception_message: impl Into<String>, message: &'static str) -> Self {
        Self {
            exception_message: exception_message.into(),
            message,
        }
    }
}

/// Recomputed pricing after the quote was updated.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingQuote {
    /// Present after a contact update; `None` once a method is already chosen.
    pub shipping_methods: Option<Vec<ShippingMethodOption>>,
    pub total: MoneyTotal,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NegotiationOutcome {
    Quoted(ShippingQuote),
    Rejected(ContactRejection),
    Failed(NegotiationFailure),
}

impl NegotiationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, NegotiationOutcome::Quoted(_))
    }
}
