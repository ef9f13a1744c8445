//! Payment method configuration handed to checkout clients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payment method code of the SubscribePro gateway.
pub const METHOD_CODE: &str = "subscribe_pro";

/// Payment method code of cards stored in the SubscribePro vault.
pub const VAULT_CODE: &str = "subscribe_pro_vault";

/// Card brand artwork the checkout form renders next to the number field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIcon {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Everything the checkout payment form needs to render the gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    pub code: &'static str,
    pub vault_code: &'static str,
    pub is_active: bool,
    pub environment_key: String,
    /// Card type code to display name.
    pub available_card_types: BTreeMap<String, String>,
    /// SubscribePro card type to host card type code.
    pub cc_types_mapper: BTreeMap<String, String>,
    pub has_verification: bool,
    pub cvv_image_url: String,
    pub icons: BTreeMap<String, CardIcon>,
}

/// Restricts the host's card types to the merchant's allow-list.
///
/// An empty allow-list leaves every host card type enabled. Codes on the
/// allow-list the host does not know are dropped.
pub fn restrict_card_types(
    catalog: BTreeMap<String, String>,
    allowed: &[String],
) -> BTreeMap<String, String> {
    if allowed.is_empty() {
        return catalog;
    }
    catalog
        .into_iter()
        .filter(|(code, _)| allowed.iter().any(|a| a == code))
        .collect()
}
