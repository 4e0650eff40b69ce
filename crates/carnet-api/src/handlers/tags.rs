//! Tag resource handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use carnet_core::TagInput;

use super::require;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TagBody {
    name: Option<String>,
}

impl TagBody {
    fn into_input(self) -> Result<TagInput, ApiError> {
        match require(self.name) {
            Some(name) => Ok(TagInput { name }),
            None => Err(ApiError::BadRequest(
                "The name field is required".to_string(),
            )),
        }
    }
}

pub async fn create_tag(
    State(state): State<AppState>,
    Json(body): Json<TagBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = body.into_input()?;
    let tag = state.tags.create(input).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<TagBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = body.into_input()?;
    if !state.tags.exists(id).await? {
        return Err(ApiError::NotFound(format!("Tag {} not found", id)));
    }
    let tag = state.tags.update(id, input).await?;
    Ok(Json(tag))
}

pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.tags.exists(id).await? {
        return Err(ApiError::NotFound(format!("Tag {} not found", id)));
    }
    state.tags.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Tag deleted successfully"
    })))
}
