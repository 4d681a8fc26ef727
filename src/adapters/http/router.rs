//! Application router.
//!
//! Merges the checkout routes with the health check and the JSON 404
//! fallback, then applies tracing, timeout and CORS layers.

use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Environment, ServerConfig};

use super::checkout::{checkout_router, CheckoutAppState};

/// Build the complete application router.
pub fn app_router(state: CheckoutAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(checkout_router())
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(server)),
        )
}

/// GET /health - Liveness probe
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// CORS from configured origins.
///
/// With no origins configured, development allows any origin and every
/// other environment allows none.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return match server.environment {
            Environment::Development => CorsLayer::permissive(),
            _ => CorsLayer::new(),
        };
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
