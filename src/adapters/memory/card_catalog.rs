//! Built-in card catalog.
//!
//! Lists the card brands SubscribePro vaults, with artwork served from a
//! configurable static asset base URL.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::foundation::DomainError;
use crate::domain::gateway::CardIcon;
use crate::ports::CardCatalog;

const DEFAULT_ASSET_BASE_URL: &str = "/static/payment";

const CARD_TYPES: [(&str, &str); 6] = [
    ("AE", "American Express"),
    ("DI", "Discover"),
    ("DN", "Diners"),
    ("JCB", "JCB"),
    ("MC", "MasterCard"),
    ("VI", "Visa"),
];

const ICON_WIDTH: u32 = 46;
const ICON_HEIGHT: u32 = 30;

#[derive(Debug, Clone)]
pub struct StaticCardCatalog {
    asset_base_url: String,
}

impl StaticCardCatalog {
    pub fn new(asset_base_url: impl Into<String>) -> Self {
        Self {
            asset_base_url: asset_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn asset(&self, file: &str) -> String {
        format!("{}/{}", self.asset_base_url, file)
    }
}

impl Default for StaticCardCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE_URL)
    }
}

#[async_trait]
impl CardCatalog for StaticCardCatalog {
    async fn card_types(&self) -> Result<BTreeMap<String, String>, DomainError> {
        Ok(CARD_TYPES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect())
    }

    async fn cvv_image_url(&self) -> Result<String, DomainError> {
        Ok(self.asset("cvv.png"))
    }

    async fn icons(&self) -> Result<BTreeMap<String, CardIcon>, DomainError> {
        Ok(CARD_TYPES
            .iter()
            .map(|(code, _)| {
                let icon = CardIcon {
                    url: self.asset(&format!("{}.png", code.to_ascii_lowercase())),
                    width: ICON_WIDTH,
                    height: ICON_HEIGHT,
                };
                (code.to_string(), icon)
            })
            .collect())
    }
}
