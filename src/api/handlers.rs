//! HTTP API handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{OpenApi, ToSchema};

use super::docs::ApiDoc;
use super::extract::{ItemBody, ItemIndex};
use crate::error::{ApiError, ErrorBody};
use crate::items::{CreatedResponse, Item, ItemStore, UpdatedResponse};
use crate::metrics;

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Item store owned by this service instance.
    pub store: ItemStore,
    /// Prometheus handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state with an empty store and no metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: String,
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// List every item in insertion order.
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses((status = 200, description = "All stored items", body = Vec<Item>))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

/// Validate and append a new item.
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = Item,
    responses(
        (status = 201, description = "Item added", body = CreatedResponse),
        (status = 400, description = "Invalid payload or business rule violated", body = ErrorBody)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ItemBody(item): ItemBody,
) -> (StatusCode, Json<CreatedResponse>) {
    let index = state.store.push(item.clone()).await;
    metrics::inc_items_created();
    info!(index, name = %item.name, quantity = item.quantity, "item added");

    (StatusCode::CREATED, Json(CreatedResponse::new(item, index)))
}

/// Replace the item at an index.
///
/// The body is validated before the index is range-checked, so an invalid
/// body is a 400 even when the index does not exist.
#[utoipa::path(
    put,
    path = "/items/{index}",
    tag = "items",
    params(("index" = i64, Path, description = "Position of the item to replace")),
    request_body = Item,
    responses(
        (status = 200, description = "Item updated", body = UpdatedResponse),
        (status = 400, description = "Invalid payload or business rule violated", body = ErrorBody),
        (status = 404, description = "Index out of range", body = ErrorBody)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    ItemIndex(index): ItemIndex,
    ItemBody(item): ItemBody,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let Some(position) = state.store.replace(index, item.clone()).await else {
        info!(index, "update rejected: index out of range");
        return Err(ApiError::ItemNotFound);
    };

    metrics::inc_items_updated();
    info!(index = position, name = %item.name, quantity = item.quantity, "item updated");

    Ok(Json(UpdatedResponse::new(item, position)))
}

/// Always fail with a 500, for exercising client error paths.
#[utoipa::path(
    get,
    path = "/simulate-error",
    tag = "system",
    responses((status = 500, description = "Simulated failure", body = ErrorBody))
)]
pub async fn simulate_error() -> ApiError {
    ApiError::Simulated
}

/// OpenAPI document for this service.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Prometheus text exposition, 503 when metrics are disabled.
pub async fn metrics_text(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed".to_string(),
        ),
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
