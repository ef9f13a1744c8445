//! HTTP handlers for the gateway configuration endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::gateway::{GetCheckoutConfigHandler, GetCheckoutConfigQuery};
use crate::config::GatewayConfig;
use crate::domain::foundation::DomainError;
use crate::ports::CardCatalog;

use crate::adapters::http::error::ErrorResponse;

#[derive(Clone)]
pub struct GatewayAppState {
    pub settings: Arc<GatewayConfig>,
    pub card_catalog: Arc<dyn CardCatalog>,
}

impl GatewayAppState {
    pub fn checkout_config_handler(&self) -> GetCheckoutConfigHandler {
        GetCheckoutConfigHandler::new(self.settings.clone(), self.card_catalog.clone())
    }
}

/// GET /subscribepro/checkout-config - Payment form configuration
pub async fn get_checkout_config(
    State(state): State<GatewayAppState>,
) -> Result<impl IntoResponse, GatewayApiError> {
    let config = state
        .checkout_config_handler()
        .handle(GetCheckoutConfigQuery {})
        .await?;

    Ok(Json(config))
}

/// API error type that converts catalog and settings errors to HTTP responses.
pub struct GatewayApiError(DomainError);

impl From<DomainError> for GatewayApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for GatewayApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Checkout config unavailable: {}", self.0);

        let body = ErrorResponse::new(self.0.code.to_string(), "Checkout configuration unavailable");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
