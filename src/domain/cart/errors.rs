//! Cart lifecycle error types.

use thiserror::Error;

use crate::domain::foundation::{CartId, CustomerId, DomainError};

pub const QUOTE_CREATE_FAILED_MESSAGE: &str = "The quote can't be created. ";
pub const QUOTE_DEACTIVATE_FAILED_MESSAGE: &str = "The quote can't be deactivated. ";

/// Errors from creating or deactivating customer carts.
#[derive(Debug, Clone, Error)]
pub enum CartError {
    #[error("No such customer: {0}")]
    CustomerNotFound(CustomerId),

    #[error("No such cart: {0}")]
    CartNotFound(CartId),

    /// The host refused to persist the quote. No cleanup is attempted;
    /// the caller retries the whole operation.
    #[error("{0}")]
    CouldNotSave(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl CartError {
    /// Creation failed while saving; the host's reason is appended.
    pub fn could_not_create(cause: impl std::fmt::Display) -> Self {
        CartError::CouldNotSave(format!("{}{}", QUOTE_CREATE_FAILED_MESSAGE, cause))
    }

    /// Deactivation failed while saving. The host's reason is logged, not returned.
    pub fn could_not_deactivate() -> Self {
        CartError::CouldNotSave(QUOTE_DEACTIVATE_FAILED_MESSAGE.to_string())
    }

    /// Message suitable for API responses.
    pub fn message(&self) -> String {
        match self {
            CartError::Infrastructure(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for CartError {
    fn from(err: DomainError) -> Self {
        CartError::Infrastructure(err.to_string())
    }
}
