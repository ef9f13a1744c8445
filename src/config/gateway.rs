//! SubscribePro gateway configuration

use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::ValidationError;

/// Merchant settings for the SubscribePro payment method
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Whether the payment method is offered at checkout
    #[serde(default)]
    pub active: bool,

    /// SubscribePro transparent redirect environment key
    #[serde(default)]
    pub environment_key: String,

    /// Allowed card type codes (comma-separated); unset allows every host card type
    pub available_card_types: Option<String>,

    /// JSON object mapping SubscribePro card types to host card codes
    pub cc_types_mapper: Option<String>,

    /// Whether the CVV field is shown
    #[serde(default)]
    pub has_verification: bool,
}

impl GatewayConfig {
    /// Get the card type allow-list as a vector
    pub fn available_card_types_list(&self) -> Vec<String> {
        self.available_card_types
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|code| code.trim().to_string())
                    .filter(|code| !code.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parse the card type mapper; an unset mapper is empty
    pub fn cc_types_mapper_map(&self) -> Result<BTreeMap<String, String>, ValidationError> {
        match self.cc_types_mapper.as_deref().map(str::trim) {
            None | Some("") => Ok(BTreeMap::new()),
            Some(raw) => {
                serde_json::from_str(raw).map_err(|_| ValidationError::InvalidCcTypesMapper)
            }
        }
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.active && self.environment_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__ENVIRONMENT_KEY"));
        }
        self.cc_types_mapper_map()?;
        Ok(())
    }
}
