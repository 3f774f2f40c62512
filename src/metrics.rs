//! Prometheus metrics for request tracking and store activity.
//!
//! This module provides:
//! - HTTP request counts and latency per matched route
//! - Item create/update counters
//! - Validation failure counter

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::ServiceError;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Items created counter metric name.
pub const METRIC_ITEMS_CREATED: &str = "items_created_total";
/// Items updated counter metric name.
pub const METRIC_ITEMS_UPDATED: &str = "items_updated_total";
/// Validation failures counter metric name.
pub const METRIC_VALIDATION_FAILURES: &str = "validation_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup, after the recorder is installed.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(METRIC_ITEMS_CREATED, "Total number of items created");
    describe_counter!(METRIC_ITEMS_UPDATED, "Total number of items updated");
    describe_counter!(
        METRIC_VALIDATION_FAILURES,
        "Total number of rejected item payloads"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder.
pub fn install_recorder() -> Result<PrometheusHandle, ServiceError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .record(latency_ms);
}

/// Increment HTTP requests counter.
pub fn inc_http_requests(method: &str, endpoint: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment items created counter.
pub fn inc_items_created() {
    counter!(METRIC_ITEMS_CREATED).increment(1);
}

/// Increment items updated counter.
pub fn inc_items_updated() {
    counter!(METRIC_ITEMS_UPDATED).increment(1);
}

/// Increment validation failures counter.
pub fn inc_validation_failures() {
    counter!(METRIC_VALIDATION_FAILURES).increment(1);
}

/// Middleware recording count and latency for every request.
///
/// Unmatched paths are grouped under `unmatched` to keep label cardinality
/// bounded.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    let status = response.status().as_u16();
    inc_http_requests(&method, &endpoint, status);
    record_http_latency(start, &endpoint, status);

    response
}
