//! Service layers wrapped around the API router.

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

/// Adds request tracing, CORS and the request timeout.
pub fn with_service_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server.allowed_origins()))
        .layer(TraceLayer::new_for_http())
}

/// `None` allows any origin.
fn cors_layer(origins: Option<Vec<String>>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let Some(origins) = origins else {
        return cors.allow_origin(Any);
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}
