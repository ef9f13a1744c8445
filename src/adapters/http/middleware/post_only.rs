//! POST guard for the Apple Pay negotiation endpoints.
//!
//! The payment sheet only ever POSTs. Anything else is refused before the
//! body is read, with the same `success: false` envelope the sheet already
//! understands.

use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const INVALID_POST_MESSAGE: &str = "Invalid Post Request.";

/// Middleware rejecting every method except POST with `401 Unauthorized`.
///
/// Install with `route_layer(axum::middleware::from_fn(require_post))` so the
/// guard runs before axum's own method matching.
pub async fn require_post(request: Request, next: Next) -> Response {
    if request.method() == Method::POST {
        return next.run(request).await;
    }

    tracing::warn!(
        method = %request.method(),
        path = %request.uri().path(),
        "Rejected non-POST negotiation request"
    );

    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "success": false,
            "message": INVALID_POST_MESSAGE
        })),
    )
        .into_response()
}
