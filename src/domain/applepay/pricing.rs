//! Pricing values exchanged with the Apple Pay sheet.
//!
//! Amounts are decimals in merchant currency units and go over the wire as
//! JSON numbers, which is what the Apple Pay JS API expects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label Apple Pay shows next to the grand total.
pub const MERCHANT_TOTAL_LABEL: &str = "MERCHANT";

/// Grand total shown on the payment sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyTotal {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl MoneyTotal {
    /// Total labeled for the merchant.
    pub fn merchant(amount: Decimal) -> Self {
        Self {
            label: MERCHANT_TOTAL_LABEL.to_string(),
            amount,
        }
    }

    /// Zeroed merchant total used on every failure response.
    pub fn zero() -> Self {
        Self::merchant(Decimal::ZERO)
    }
}

/// One labeled component of the total breakdown (subtotal, shipping, tax...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Apple Pay line item type (`final` or `pending`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
            kind: None,
        }
    }
}

/// A shipping method the pricing engine can apply to the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethodOption {
    #[serde(alias = "identifier")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Adapter-specific keys carried through to the client untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShippingMethodOption {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            detail: None,
            amount: None,
            extra: Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// Shipping method choice handed to the pricing adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum ShippingMethodSelection {
    /// The only option the adapter offered, applied without a client round trip.
    Offered(ShippingMethodOption),
    /// The `shippingMethod` payload exactly as the wallet sent it.
    Client(Value),
}

impl ShippingMethodSelection {
    /// Method identifier, when the payload carries one the crate can read.
    ///
    /// Client payloads may be a bare string or an object with an
    /// `identifier` (Apple Pay) or `id` key.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            ShippingMethodSelection::Offered(option) => Some(option.id.as_str()),
            ShippingMethodSelection::Client(Value::String(id)) => Some(id.as_str()),
            ShippingMethodSelection::Client(Value::Object(fields)) => fields
                .get("identifier")
                .or_else(|| fields.get("id"))
                .and_then(Value::as_str),
            ShippingMethodSelection::Client(_) => None,
        }
    }
}
