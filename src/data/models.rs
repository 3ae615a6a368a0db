//! Data models
//!
//! Items held by the in-memory store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// To-do item
// =============================================================================

/// A single to-do entry
///
/// `modified` is stamped once at creation. Items are never mutated
/// after they reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub modified: DateTime<Utc>,
}

impl TodoItem {
    /// Create an item stamped with the given time
    pub fn new(text: impl Into<String>, modified: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            modified,
        }
    }
}
