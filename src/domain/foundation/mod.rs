//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary of the
//! checkout bridge domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode};
pub use ids::{CartId, CustomerId, PaymentProfileId, StoreId};
