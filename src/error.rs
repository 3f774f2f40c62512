//! Unified error types for the item service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::items::{FieldError, ValidationFailure};

/// Fixed detail for an out-of-range item index.
pub const ITEM_NOT_FOUND: &str = "Item not found";
/// Fixed detail for the simulated failure endpoint.
pub const SIMULATED_ERROR: &str = "Simulated internal server error";

/// Startup and runtime errors outside request handling.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request outcome that maps to a non-2xx response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Structural or business-rule failure; always 400.
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    /// Item index out of range.
    #[error("Item not found")]
    ItemNotFound,

    /// Deliberate failure from the simulate-error endpoint.
    #[error("Simulated internal server error")]
    Simulated,

    /// No route matched the request path.
    #[error("Not Found")]
    RouteNotFound,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::ItemNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Simulated => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error detail.
    pub detail: String,
    /// Structural problems, present only for malformed payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        let errors = match err {
            ApiError::Validation(ValidationFailure::Malformed { errors }) => Some(errors.clone()),
            _ => None,
        };

        Self {
            detail: err.to_string(),
            errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Validation(failure) => {
                crate::metrics::inc_validation_failures();
                warn!(reason = %failure, "rejected item payload");
            }
            Self::Simulated => error!("simulated internal server error"),
            Self::ItemNotFound | Self::RouteNotFound => {}
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(
            ApiError::from(ValidationFailure::EmptyName).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ValidationFailure::Malformed { errors: vec![] }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::ItemNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Simulated.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn fixed_bodies() {
        let body = serde_json::to_value(ErrorBody::from(&ApiError::ItemNotFound)).unwrap();
        assert_eq!(body, json!({"detail": ITEM_NOT_FOUND}));

        let body = serde_json::to_value(ErrorBody::from(&ApiError::Simulated)).unwrap();
        assert_eq!(body, json!({"detail": SIMULATED_ERROR}));
    }

    #[test]
    fn business_failures_carry_rule_message_only() {
        let body =
            serde_json::to_value(ErrorBody::from(&ApiError::from(ValidationFailure::QuantityTooLow)))
                .unwrap();
        assert_eq!(body, json!({"detail": "Quantity must be >= 1"}));
    }

    #[test]
    fn malformed_failures_list_errors() {
        let failure = ValidationFailure::malformed(FieldError::new(
            "missing",
            &["body", "name"],
            "Field required",
        ));
        let body = serde_json::to_value(ErrorBody::from(&ApiError::from(failure))).unwrap();
        assert_eq!(body["detail"], "Invalid request payload");
        assert_eq!(body["errors"][0]["type"], "missing");
        assert_eq!(body["errors"][0]["loc"], json!(["body", "name"]));
    }
}
