//! Request extractors that report every rejection as a validation failure.
//!
//! Framework rejections (bad JSON, wrong content type, unparsable path
//! segments) never reach the client in their native form; they become
//! `ApiError::Validation` and therefore 400.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::items::{validate_item, FieldError, Item, ValidationFailure};

/// A request body that passed structural and business validation.
#[derive(Debug, Clone)]
pub struct ItemBody(pub Item);

#[async_trait]
impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationFailure::malformed(rejection_error(&rejection)))?;

        Ok(Self(validate_item(&body)?))
    }
}

fn rejection_error(rejection: &JsonRejection) -> FieldError {
    match rejection {
        JsonRejection::JsonSyntaxError(_) => FieldError::new(
            "json_invalid",
            &["body"],
            format!("JSON decode error: {}", rejection.body_text()),
        ),
        JsonRejection::MissingJsonContentType(_) => FieldError::new(
            "content_type",
            &["header", "content-type"],
            "Expected request with `Content-Type: application/json`",
        ),
        _ => FieldError::new("body_invalid", &["body"], rejection.body_text()),
    }
}

/// Raw item index from the path.
///
/// Sign is preserved so negative indices reach the range check. Integers too
/// large for `i64` saturate, which keeps them out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemIndex(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ItemIndex
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ValidationFailure::malformed(FieldError::new(
                    "path_invalid",
                    &["path", "index"],
                    rejection.body_text(),
                ))
            })?;

        parse_index(&raw).map(Self).ok_or_else(|| {
            ValidationFailure::malformed(FieldError::new(
                "int_parsing",
                &["path", "index"],
                "Input should be a valid integer, unable to parse string as an integer",
            ))
            .into()
        })
    }
}

fn parse_index(raw: &str) -> Option<i64> {
    if let Ok(index) = raw.parse::<i64>() {
        return Some(index);
    }

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(if negative { i64::MIN } else { i64::MAX })
}
