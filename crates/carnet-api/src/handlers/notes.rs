//! Note resource handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use carnet_core::NoteInput;

use super::{require, require_id};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteBody {
    title: Option<String>,
    content: Option<String>,
    user_id: Option<i32>,
    category_id: Option<i32>,
}

impl NoteBody {
    fn into_input(self) -> Result<NoteInput, ApiError> {
        match (
            require(self.title),
            require(self.content),
            require_id(self.user_id),
            require_id(self.category_id),
        ) {
            (Some(title), Some(content), Some(user_id), Some(category_id)) => Ok(NoteInput {
                title,
                content,
                user_id,
                category_id,
            }),
            _ => Err(ApiError::BadRequest(
                "All fields must be provided".to_string(),
            )),
        }
    }
}

/// Create a note. The store enforces that `userId` and `categoryId`
/// reference existing rows; a violation surfaces as a 500, not a 400.
pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<NoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = body.into_input()?;
    let note = state.notes.create(input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<NoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = body.into_input()?;
    if !state.notes.exists(id).await? {
        return Err(ApiError::NotFound(format!("Note {} not found", id)));
    }
    let note = state.notes.update(id, input).await?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.notes.exists(id).await? {
        return Err(ApiError::NotFound(format!("Note {} not found", id)));
    }
    state.notes.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Note deleted successfully"
    })))
}

/// List every note with its user and category embedded. Full-table scan
/// semantics: no pagination, filtering, or sorting.
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state.notes.list_with_relations().await?;
    Ok(Json(notes))
}
