//! GetCheckoutConfigHandler - Query handler assembling the checkout payment config.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::gateway::{restrict_card_types, CheckoutConfig, METHOD_CODE, VAULT_CODE};
use crate::ports::CardCatalog;

/// Query for the checkout payment configuration.
#[derive(Debug, Clone, Default)]
pub struct GetCheckoutConfigQuery {}

/// Merges merchant gateway settings with the host card catalog.
pub struct GetCheckoutConfigHandler {
    settings: Arc<GatewayConfig>,
    catalog: Arc<dyn CardCatalog>,
}

impl GetCheckoutConfigHandler {
    pub fn new(settings: Arc<GatewayConfig>, catalog: Arc<dyn CardCatalog>) -> Self {
        Self { settings, catalog }
    }

    pub async fn handle(&self, _query: GetCheckoutConfigQuery) -> Result<CheckoutConfig, DomainError> {
        let available_card_types = restrict_card_types(
            self.catalog.card_types().await?,
            &self.settings.available_card_types_list(),
        );

        let cc_types_mapper = self
            .settings
            .cc_types_mapper_map()
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

        Ok(CheckoutConfig {
            code: METHOD_CODE,
            vault_code: VAULT_CODE,
            is_active: self.settings.active,
            environment_key: self.settings.environment_key.clone(),
            available_card_types,
            cc_types_mapper,
            has_verification: self.settings.has_verification,
            cvv_image_url: self.catalog.cvv_image_url().await?,
            icons: self.catalog.icons().await?,
        })
    }
}
