//! Customer cart lifecycle.
//!
//! SubscribePro places recurring orders against a fresh customer quote, so
//! the bridge needs to open an empty cart for a customer and retire it
//! afterwards.

mod errors;
mod quote;

pub use errors::{CartError, QUOTE_CREATE_FAILED_MESSAGE, QUOTE_DEACTIVATE_FAILED_MESSAGE};
pub use quote::Quote;
