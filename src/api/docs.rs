//! OpenAPI document served at `/openapi.json`.

use utoipa::OpenApi;

use super::handlers;
use crate::error::ErrorBody;
use crate::items::{CreatedResponse, FieldError, Item, UpdatedResponse};

/// Generated OpenAPI description of the item endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Service",
        description = "Mock in-memory item API for exercising client behavior"
    ),
    paths(
        handlers::health,
        handlers::list_items,
        handlers::create_item,
        handlers::update_item,
        handlers::simulate_error,
    ),
    components(schemas(
        Item,
        CreatedResponse,
        UpdatedResponse,
        ErrorBody,
        FieldError,
        handlers::HealthResponse,
    )),
    tags(
        (name = "items", description = "Positional item store"),
        (name = "system", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;
