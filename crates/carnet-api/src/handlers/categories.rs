//! Category resource handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use carnet_core::CategoryInput;

use super::require;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryBody {
    name: Option<String>,
}

impl CategoryBody {
    fn into_input(self) -> Result<CategoryInput, ApiError> {
        match require(self.name) {
            Some(name) => Ok(CategoryInput { name }),
            None => Err(ApiError::BadRequest(
                "The name field is required".to_string(),
            )),
        }
    }
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CategoryBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = body.into_input()?;
    let category = state.categories.create(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<CategoryBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = body.into_input()?;
    if !state.categories.exists(id).await? {
        return Err(ApiError::NotFound(format!("Category {} not found", id)));
    }
    let category = state.categories.update(id, input).await?;
    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.categories.exists(id).await? {
        return Err(ApiError::NotFound(format!("Category {} not found", id)));
    }
    state.categories.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Category deleted successfully"
    })))
}
