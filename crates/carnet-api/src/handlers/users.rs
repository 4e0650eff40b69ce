//! User resource handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use carnet_core::UserInput;

use super::require;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl UserBody {
    /// Validate field presence before any store access.
    fn into_input(self) -> Result<UserInput, ApiError> {
        match (
            require(self.name),
            require(self.email),
            require(self.password),
        ) {
            (Some(name), Some(email), Some(password)) => Ok(UserInput {
                name,
                email,
                password,
            }),
            _ => Err(ApiError::BadRequest(
                "All fields must be provided".to_string(),
            )),
        }
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = body.into_input()?;
    let user = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UserBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = body.into_input()?;
    if !state.users.exists(id).await? {
        return Err(ApiError::NotFound(format!("User {} not found", id)));
    }
    let user = state.users.update(id, input).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.users.exists(id).await? {
        return Err(ApiError::NotFound(format!("User {} not found", id)));
    }
    state.users.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "User deleted successfully"
    })))
}
