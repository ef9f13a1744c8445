//! 3-D Secure status reported by SubscribePro for a stored payment profile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 3DS status of a vaulted card.
///
/// SubscribePro may add statuses over time; anything not listed here is kept
/// verbatim in `Other` so a profile still round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThreeDsStatus {
    PendingAuthentication,
    Authenticated,
    AuthenticationFailed,
    Other(String),
}

/// Statuses that mean a 3DS flow was started for the profile.
pub const ACTIVE_THREE_DS_STATUSES: [ThreeDsStatus; 3] = [
    ThreeDsStatus::PendingAuthentication,
    ThreeDsStatus::Authenticated,
    ThreeDsStatus::AuthenticationFailed,
];

impl ThreeDsStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ThreeDsStatus::PendingAuthentication => "pending_authentication",
            ThreeDsStatus::Authenticated => "authenticated",
            ThreeDsStatus::AuthenticationFailed => "authentication_failed",
            ThreeDsStatus::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for ThreeDsStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending_authentication" => ThreeDsStatus::PendingAuthentication,
            "authenticated" => ThreeDsStatus::Authenticated,
            "authentication_failed" => ThreeDsStatus::AuthenticationFailed,
            _ => ThreeDsStatus::Other(raw),
        }
    }
}

impl From<&str> for ThreeDsStatus {
    fn from(raw: &str) -> Self {
        ThreeDsStatus::from(raw.to_string())
    }
}

impl From<ThreeDsStatus> for String {
    fn from(status: ThreeDsStatus) -> Self {
        match status {
            ThreeDsStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ThreeDsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
