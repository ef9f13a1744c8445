//! Error types for the domain layer.

use std::error::Error;
use std::fmt;

/// Failure categories reported by host-facing ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The host's storage refused or lost the operation.
    DatabaseError,
    /// Anything else, including invalid merchant settings.
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Infrastructure failure returned by repository-style ports.
///
/// `message` is the host's own wording; the cart service appends it to
/// "The quote can't be created." responses.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DatabaseError, "Quote 12 is locked");
        assert_eq!(format!("{}", err), "[DATABASE_ERROR] Quote 12 is locked");
    }

    #[test]
    fn internal_error_code_is_screaming_case() {
        assert_eq!(ErrorCode::InternalError.to_string(), "INTERNAL_ERROR");
    }
}
