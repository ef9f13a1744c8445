//! Stored payment profile as exposed by the SubscribePro vault.

use serde::{Deserialize, Serialize};

use super::three_ds::{ThreeDsStatus, ACTIVE_THREE_DS_STATUSES};
use crate::domain::foundation::{CustomerId, PaymentProfileId};

/// A vaulted card belonging to a SubscribePro customer.
///
/// Only the fields checkout needs are modelled; the remote record carries
/// many more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentProfile {
    pub id: PaymentProfileId,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default)]
    pub three_ds_status: Option<ThreeDsStatus>,
}

impl PaymentProfile {
    pub fn new(id: PaymentProfileId) -> Self {
        Self {
            id,
            customer_id: None,
            three_ds_status: None,
        }
    }

    pub fn with_three_ds_status(mut self, status: impl Into<ThreeDsStatus>) -> Self {
        self.three_ds_status = Some(status.into());
        self
    }

    /// True once a 3DS flow has been started for this profile, whatever its result.
    pub fn has_three_ds_status(&self) -> bool {
        self.three_ds_status
            .as_ref()
            .is_some_and(|status| ACTIVE_THREE_DS_STATUSES.contains(status))
    }

    pub fn is_three_ds_failed(&self) -> bool {
        self.three_ds_status == Some(ThreeDsStatus::AuthenticationFailed)
    }

    pub fn is_three_ds_authenticated(&self) -> bool {
        self.three_ds_status == Some(ThreeDsStatus::Authenticated)
    }
}
