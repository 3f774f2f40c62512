//! Item types and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A name/quantity record. Identity is its position in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Item {
    /// Item name, stored as submitted.
    #[schema(example = "Apples")]
    pub name: String,
    /// Quantity, always at least 1.
    #[schema(example = 3, minimum = 1)]
    pub quantity: i64,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Body returned after a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreatedResponse {
    /// Confirmation message: "item added".
    pub message: String,
    /// The stored item.
    pub item: Item,
    /// Position assigned to the item.
    pub index: usize,
}

impl CreatedResponse {
    /// Build the confirmation for an item stored at `index`.
    pub fn new(item: Item, index: usize) -> Self {
        Self {
            message: "item added".to_string(),
            item,
            index,
        }
    }
}

/// Body returned after a successful update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UpdatedResponse {
    /// Confirmation message: "item updated".
    pub message: String,
    /// Position of the replaced item.
    pub index: usize,
    /// The item now stored at `index`.
    pub item: Item,
}

impl UpdatedResponse {
    /// Build the confirmation for an item replaced at `index`.
    pub fn new(item: Item, index: usize) -> Self {
        Self {
            message: "item updated".to_string(),
            index,
            item,
        }
    }
}
