//! Shipping contact submitted by the Apple Pay sheet.
//!
//! The wallet sends a partial address while the shopper is still choosing,
//! so the contact is kept as an ordered field map rather than a fixed struct.
//! Only the fields the pricing engine needs to rate a destination are checked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Address fields that must carry a value before the quote can be rated.
pub const REQUIRED_CONTACT_FIELDS: [&str; 5] = [
    "administrativeArea",
    "country",
    "countryCode",
    "locality",
    "postalCode",
];

/// Returns true if `field` is one of [`REQUIRED_CONTACT_FIELDS`].
pub fn is_required_field(field: &str) -> bool {
    REQUIRED_CONTACT_FIELDS.contains(&field)
}

/// Loose emptiness check for a submitted field value.
///
/// Null, `false`, the empty string and empty arrays or objects are empty.
/// Numbers (including zero) and the string `"0"` are values.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Number(_) => false,
    }
}

/// Ordered mapping of address field name to submitted value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingContact(Map<String, Value>);

impl ShippingContact {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// All submitted fields in the order the client sent them.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String value of a field, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// First required field, in submission order, whose value is blank.
    ///
    /// Required fields the client did not send at all are not reported;
    /// the wallet omits fields it has no data for and the pricing engine
    /// decides whether it can rate the partial address.
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, value)| is_required_field(field) && is_blank(value))
            .map(|(field, _)| field.as_str())
    }
}

impl From<Map<String, Value>> for ShippingContact {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
