//! Item records, validation, and the in-memory store.
//!
//! This module handles:
//! - The `Item` record and the response bodies built around it
//! - Structural and business-rule validation of candidate payloads
//! - The positional, lock-protected item store

pub mod store;
pub mod types;
pub mod validation;

pub use store::ItemStore;
pub use types::{CreatedResponse, Item, UpdatedResponse};
pub use validation::{validate_item, FieldError, ValidationFailure};
