//! To-do endpoints
//!
//! - GET /add?text=...
//! - GET /items
//! - GET /last

use axum::{
    Router,
    extract::{RawQuery, State},
    http::StatusCode,
    routing::get,
};

use crate::AppState;
use crate::error::{AppError, Result};
use crate::metrics::{HTTP_REQUESTS_TOTAL, ITEMS_ADDED_TOTAL};
use crate::service::NO_ITEMS;

/// Create to-do router
///
/// Routes:
/// - GET /add
/// - GET /items
/// - GET /last
pub fn todo_router() -> Router<AppState> {
    Router::new()
        .route("/add", get(add_item))
        .route("/items", get(list_items))
        .route("/last", get(last_item))
}

/// First value of `name` in a raw query string, percent-decoded
fn first_query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// GET /add
///
/// Query: ?text=<item text>
///
/// Responds 201 with an empty body, or 400 when `text` is absent.
async fn add_item(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<StatusCode> {
    let Some(text) = first_query_param(query.as_deref(), "text") else {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/add", "400"])
            .inc();
        return Err(AppError::MissingParameter("text"));
    };

    tracing::info!(text = %text, "Adding item");
    state.todos.add(text).await;
    ITEMS_ADDED_TOTAL.inc();

    HTTP_REQUESTS_TOTAL
        .with_label_values(&["GET", "/add", "201"])
        .inc();

    Ok(StatusCode::CREATED)
}

/// GET /items
///
/// One display line per item, in insertion order.
async fn list_items(State(state): State<AppState>) -> String {
    let items = state.todos.list().await;
    tracing::info!(count = items.len(), "Listing items");

    HTTP_REQUESTS_TOTAL
        .with_label_values(&["GET", "/items", "200"])
        .inc();

    if items.is_empty() {
        NO_ITEMS.to_string()
    } else {
        items.join("\n")
    }
}

/// GET /last
async fn last_item(State(state): State<AppState>) -> String {
    tracing::info!("Fetching last item added");

    HTTP_REQUESTS_TOTAL
        .with_label_values(&["GET", "/last", "200"])
        .inc();

    state.todos.last().await
}
