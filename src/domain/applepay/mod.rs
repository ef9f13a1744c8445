//! Apple Pay shipping negotiation domain.
//!
//! The exchange is two steps driven by the payment sheet:
//! 1. The shopper picks an address; the sheet posts a partial shipping
//!    contact and gets back shipping methods and a new total.
//! 2. The shopper picks a method; the sheet posts it and gets back the
//!    recomputed total and line items.

mod contact;
mod outcome;
mod pricing;

pub use contact::{is_blank, is_required_field, ShippingContact, REQUIRED_CONTACT_FIELDS};
pub use outcome::{
    ContactErrorCode, ContactRejection, NegotiationFailure, NegotiationOutcome, ShippingQuote,
    ADDRESS_LINES_FIELD, ADDRESS_UNSERVICEABLE_MESSAGE, CONTACT_FAILURE_MESSAGE,
    METHOD_FAILURE_MESSAGE, MISSING_SHIPPING_METHOD_MESSAGE, SHIPPING_CONTACT_INVALID_MESSAGE,
};
pub use pricing::{
    LineItem, MoneyTotal, ShippingMethodOption, ShippingMethodSelection, MERCHANT_TOTAL_LABEL,
};
