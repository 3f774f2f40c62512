//! Candidate payload validation.
//!
//! Validation runs in a single pass: structural checks first (every field
//! problem is collected), then the business rules in order. Any failure is a
//! client error of the same kind, whichever check produced it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

use super::types::Item;

/// One structural problem with a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    /// Machine-readable error kind, e.g. `missing` or `string_type`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Location of the offending input, e.g. `["body", "name"]`.
    pub loc: Vec<String>,
    /// Human-readable message.
    pub msg: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(kind: &str, loc: &[&str], msg: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
        }
    }

    fn missing(field: &str) -> Self {
        Self::new("missing", &["body", field], "Field required")
    }
}

/// Why a candidate item was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Body is not well-formed or has missing/mistyped fields.
    #[error("Invalid request payload")]
    Malformed {
        /// Every structural problem found.
        errors: Vec<FieldError>,
    },

    /// Name is empty or whitespace only.
    #[error("Name must not be empty")]
    EmptyName,

    /// Quantity is below 1.
    #[error("Quantity must be >= 1")]
    QuantityTooLow,
}

impl ValidationFailure {
    /// Structural failure with a single error.
    pub fn malformed(error: FieldError) -> Self {
        Self::Malformed {
            errors: vec![error],
        }
    }

    /// Structural errors, empty for business-rule failures.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Malformed { errors } => errors.as_slice(),
            Self::EmptyName | Self::QuantityTooLow => &[],
        }
    }
}

/// Validate a decoded JSON body as an item.
pub fn validate_item(body: &Value) -> Result<Item, ValidationFailure> {
    let Some(fields) = body.as_object() else {
        return Err(ValidationFailure::malformed(FieldError::new(
            "model_attributes_type",
            &["body"],
            "Input should be a valid dictionary or object to extract fields from",
        )));
    };

    let mut errors = Vec::new();
    let name = extract_name(fields, &mut errors);
    let quantity = extract_quantity(fields, &mut errors);

    let (Some(name), Some(quantity)) = (name, quantity) else {
        return Err(ValidationFailure::Malformed { errors });
    };

    if name.trim().is_empty() {
        return Err(ValidationFailure::EmptyName);
    }

    if quantity < 1 {
        return Err(ValidationFailure::QuantityTooLow);
    }

    Ok(Item::new(name, quantity))
}

fn extract_name<'a>(fields: &'a Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<&'a str> {
    match fields.get("name") {
        None => {
            errors.push(FieldError::missing("name"));
            None
        }
        Some(Value::String(name)) => Some(name),
        Some(_) => {
            errors.push(FieldError::new(
                "string_type",
                &["body", "name"],
                "Input should be a valid string",
            ));
            None
        }
    }
}

fn extract_quantity(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<i64> {
    match fields.get("quantity") {
        None => {
            errors.push(FieldError::missing("quantity"));
            None
        }
        // Integers outside i64 fall through to the type error.
        Some(value) => match value.as_i64() {
            Some(quantity) => Some(quantity),
            None => {
                errors.push(FieldError::new(
                    "int_type",
                    &["body", "quantity"],
                    "Input should be a valid integer",
                ));
                None
            }
        },
    }
}
