//! Service layer
//!
//! Contains business logic separated from HTTP handlers.

mod todo;

pub use todo::{Clock, NO_ITEMS, SystemClock, TodoService, format_for_display};
