//! Cross-cutting layers wrapped around the assembled API router.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Wrap `router` with CORS and request tracing.
///
/// Requests are never cut short here; a slow pricing engine still answers
/// with the JSON envelope once it returns.
pub fn with_server_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Storefront origins allowed to call the API. `*` allows any origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let configured = server.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if configured.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = configured
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}
