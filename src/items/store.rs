//! Positional in-memory item store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use super::types::Item;

/// Ordered, append-then-mutate item storage.
///
/// Clones share the same underlying list; create a new store for independent
/// state. Every operation holds the single lock for its full duration.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Arc<Mutex<Vec<Item>>>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every item in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    /// Whether the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    /// Item at `index`, if any.
    pub async fn get(&self, index: usize) -> Option<Item> {
        self.items.lock().await.get(index).cloned()
    }

    /// Append an item, returning its index.
    pub async fn push(&self, item: Item) -> usize {
        let mut items = self.items.lock().await;
        let index = items.len();
        items.push(item);
        debug!(index, len = items.len(), "item appended");
        index
    }

    /// Replace the item at `index`.
    ///
    /// Returns the in-range index on success, `None` when `index` is negative
    /// or past the end (store left untouched).
    pub async fn replace(&self, index: i64, item: Item) -> Option<usize> {
        let mut items = self.items.lock().await;
        let position = usize::try_from(index).ok()?;
        let slot = items.get_mut(position)?;
        *slot = item;
        debug!(index = position, "item replaced");
        Some(position)
    }
}
