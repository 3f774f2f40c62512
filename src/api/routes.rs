//! HTTP API route definitions.

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_item, health, list_items, metrics_text, not_found, openapi_json, simulate_error,
    update_item, AppState,
};
use crate::metrics::track_requests;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Item endpoints
        .route("/items", get(list_items).post(create_item))
        .route("/items/:index", put(update_item))
        .route("/simulate-error", get(simulate_error))
        // Diagnostics
        .route("/openapi.json", get(openapi_json))
        .route("/metrics", get(metrics_text))
        .route_layer(middleware::from_fn(track_requests))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
