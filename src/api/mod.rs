//! API layer
//!
//! HTTP handlers for:
//! - To-do endpoints (plain text)
//! - Metrics (Prometheus)

pub mod metrics;
mod todo;

pub use metrics::metrics_router;
pub use todo::todo_router;
