//! Mock in-memory item service.
//!
//! A small HTTP API over a positional list of name/quantity records, used to
//! exercise client behavior: happy paths, validation failures, missing
//! resources, and a deliberate server error.
//!
//! ```text
//! GET  /health          200 {"status":"ok"}
//! GET  /items           200 [ ... ]
//! POST /items           201 {message, item, index} | 400
//! PUT  /items/{index}   200 {message, index, item} | 400 | 404
//! GET  /simulate-error  500
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Error types and HTTP error mapping
//! - [`items`]: Item records, validation, and the store
//! - [`api`]: HTTP router and handlers
//! - [`metrics`]: Prometheus request and store metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod items;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError};
