//! HTTP handlers for the Apple Pay shipping negotiation endpoints.
//!
//! Both endpoints answer `200` for every negotiation outcome, including
//! rejections. Only unreadable JSON (`400`) and pricing engine outages (`500`)
//! leave the envelope.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::application::handlers::applepay::{ShippingContactHandler, ShippingMethodHandler};
use crate::ports::{QuotePricingAdapter, QuotePricingError};

use super::dto::{shipping_contact_command, shipping_method_command, NegotiationResponse};
use crate::adapters::http::error::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the negotiation endpoints.
#[derive(Clone)]
pub struct ApplePayAppState {
    pub quote_pricing: Arc<dyn QuotePricingAdapter>,
}

impl ApplePayAppState {
    pub fn new(quote_pricing: Arc<dyn QuotePricingAdapter>) -> Self {
        Self { quote_pricing }
    }

    pub fn shipping_contact_handler(&self) -> ShippingContactHandler {
        ShippingContactHandler::new(self.quote_pricing.clone())
    }

    pub fn shipping_method_handler(&self) -> ShippingMethodHandler {
        ShippingMethodHandler::new(self.quote_pricing.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /applepay/shippingList - Rate the quote for a new shipping contact
pub async fn shipping_list(
    State(state): State<ApplePayAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApplePayApiError> {
    let body = parse_body(&body)?;
    let cmd = shipping_contact_command(&body);

    let outcome = state.shipping_contact_handler().handle(cmd).await?;

    Ok(Json(NegotiationResponse::from(outcome)))
}

/// POST /applepay/shippingMethod - Apply the chosen shipping method
pub async fn shipping_method(
    State(state): State<ApplePayAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApplePayApiError> {
    let body = parse_body(&body)?;
    let cmd = shipping_method_command(&body);

    let outcome = state.shipping_method_handler().handle(cmd).await?;

    Ok(Json(NegotiationResponse::from(outcome)))
}

/// Reads the raw body as JSON. An empty body is an empty object.
fn parse_body(body: &[u8]) -> Result<Value, ApplePayApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| ApplePayApiError::MalformedBody(e.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Failures that escape the negotiation envelope.
#[derive(Debug)]
pub enum ApplePayApiError {
    MalformedBody(String),
    Pricing(QuotePricingError),
}

impl From<QuotePricingError> for ApplePayApiError {
    fn from(err: QuotePricingError) -> Self {
        Self::Pricing(err)
    }
}

impl IntoResponse for ApplePayApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApplePayApiError::MalformedBody(reason) => {
                tracing::warn!("Unreadable negotiation body: {}", reason);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("MALFORMED_BODY", "Request body is not valid JSON"),
                )
            }
            ApplePayApiError::Pricing(err) => {
                tracing::error!("Pricing engine failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("PRICING_UNAVAILABLE", "An internal error occurred"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
