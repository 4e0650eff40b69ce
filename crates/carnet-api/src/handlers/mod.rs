//! HTTP request handlers, one module per resource family.

pub mod categories;
pub mod notes;
pub mod tags;
pub mod users;

use axum::{response::IntoResponse, Json};

/// Reject absent or empty string fields.
///
/// The contract treats an empty string the same as a missing field, so
/// both collapse to `None` here. Whitespace-only values pass.
pub(crate) fn require(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Reject absent, zero, or negative ids.
///
/// Generated ids start at 1; a zero id in a request body is treated as
/// missing rather than passed through to the store.
pub(crate) fn require_id(field: Option<i32>) -> Option<i32> {
    field.filter(|id| *id > 0)
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
