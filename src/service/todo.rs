//! To-do service
//!
//! Stamps new items, formats them for display, and picks the most
//! recently modified entry.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::data::{TodoItem, TodoStore};

/// Sentinel returned when the store holds nothing
pub const NO_ITEMS: &str = "No items";

/// Source of creation timestamps
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// To-do service
pub struct TodoService {
    store: Arc<TodoStore>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    /// Create new to-do service backed by the system clock
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create new to-do service with an explicit clock
    pub fn with_clock(store: Arc<TodoStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Add an item stamped with the current time
    ///
    /// Empty text is accepted as-is.
    pub async fn add(&self, text: impl Into<String>) {
        let item = TodoItem::new(text, self.clock.now());
        self.store.add(item).await;
    }

    /// Every item as a display string, in insertion order
    pub async fn list(&self) -> Vec<String> {
        self.store
            .list()
            .await
            .iter()
            .map(format_for_display)
            .collect()
    }

    /// Display string of the most recently modified item
    ///
    /// Ties on `modified` go to the later insertion. Returns
    /// [`NO_ITEMS`] when the store is empty.
    pub async fn last(&self) -> String {
        let items = self.store.list().await;

        // `max_by_key` yields the last of several equal maxima.
        items
            .iter()
            .max_by_key(|item| item.modified)
            .map(format_for_display)
            .unwrap_or_else(|| NO_ITEMS.to_string())
    }

    /// Number of stored items
    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}

/// Render an item as `<modified> - <text>`
pub fn format_for_display(item: &TodoItem) -> String {
    format!(
        "{} - {}",
        item.modified.to_rfc3339_opts(SecondsFormat::Millis, true),
        item.text
    )
}
