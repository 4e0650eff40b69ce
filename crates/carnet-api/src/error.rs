//! HTTP error mapping.
//!
//! Three tiers: validation failures map to 400, missing rows to 404, and
//! everything the store reports to a generic 500. Store errors are logged
//! with full detail here; the response body only ever carries
//! `{"message": "<human-readable>"}`.

use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    Database(carnet_core::Error),
    NotFound(String),
    BadRequest(String),
}

impl From<carnet_core::Error> for ApiError {
    fn from(err: carnet_core::Error) -> Self {
        match &err {
            carnet_core::Error::NotFound(msg) => ApiError::NotFound(format!("{} not found", msg)),
            carnet_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            _ => ApiError::Database(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Database(err) => {
                error!(error = %err, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
