//! HTTP API module: item endpoints plus health, docs, and metrics.

pub mod docs;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::create_router;
