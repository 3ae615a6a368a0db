//! Data layer module
//!
//! Volatile in-memory storage for to-do items. Nothing is persisted.

mod models;
mod store;

pub use models::*;
pub use store::TodoStore;
