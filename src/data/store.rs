//! In-memory to-do store
//!
//! Volatile, cleared on restart. The sequence is append-only and
//! guarded by a single `RwLock` so concurrent handlers never race.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::TodoItem;

/// Ordered, append-only item store
///
/// Insertion order is preserved. There is no capacity limit and no
/// deduplication.
#[derive(Debug, Default)]
pub struct TodoStore {
    items: Arc<RwLock<Vec<TodoItem>>>,
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append an item to the end of the sequence
    pub async fn add(&self, item: TodoItem) {
        let mut items = self.items.write().await;
        items.push(item);

        // Gauge is written while the write guard is held.
        use crate::metrics::ITEMS_GAUGE;
        ITEMS_GAUGE.set(items.len() as i64);
    }

    /// Snapshot of every item in insertion order
    ///
    /// The returned vector is a copy; mutating it does not touch the store.
    pub async fn list(&self) -> Vec<TodoItem> {
        self.items.read().await.clone()
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(text: &str, secs: i64) -> TodoItem {
        TodoItem::new(text, Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[tokio::test]
    async fn test_add_preserves_insertion_order() {
        let store = TodoStore::new();
        store.add(item("first", 30)).await;
        store.add(item("second", 10)).await;
        store.add(item("third", 20)).await;

        let texts: Vec<String> = store.list().await.into_iter().map(|i| i.text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let store = TodoStore::new();
        store.add(item("milk", 1)).await;
        store.add(item("milk", 1)).await;

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_returns_detached_snapshot() {
        let store = TodoStore::new();
        store.add(item("milk", 1)).await;

        let mut snapshot = store.list().await;
        snapshot.clear();
        snapshot.push(item("injected", 2));

        let items = store.list().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "milk");
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = TodoStore::new();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_adds_all_land() {
        let store = Arc::new(TodoStore::new());

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.add(item(&format!("task-{n}"), n)).await;
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 64);
    }
}
