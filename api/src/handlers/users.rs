//! User CRUD handlers

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
};
use serde::{Deserialize, Serialize};
use tracing::info;
use user_crud_core::domain::{User, UserInput};

use crate::envelope::ApiResponse;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Delete confirmation payload
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Decode a request body as JSON whatever its declared content type
fn decode_input(body: Result<Bytes, BytesRejection>) -> ApiResult<UserInput> {
    let body = body?;
    Ok(serde_json::from_slice(&body)?)
}

/// Resolve a path id; ids outside the SERIAL range cannot match a row
fn user_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i32> {
    let Path(id) = id?;
    i32::try_from(id).map_err(|_| ApiError::UnknownId(id))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<ApiResponse<User>> {
    let input = decode_input(body)?;
    let user = state.store.create(&input).await?;

    info!("Created user {}", user.id);
    Ok(ApiResponse::created(user))
}

/// List all users, newest first
pub async fn list_users(State(state): State<AppState>) -> ApiResult<ApiResponse<Vec<User>>> {
    let users = state.store.list().await?;
    Ok(ApiResponse::ok(users))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ApiResponse<User>> {
    let id = user_id(id)?;
    let user = state.store.get(id).await?;
    Ok(ApiResponse::ok(user))
}

/// Update a user's name and email
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<ApiResponse<User>> {
    let input = decode_input(body)?;
    let id = user_id(id)?;
    let user = state.store.update(id, &input).await?;

    info!("Updated user {}", id);
    Ok(ApiResponse::ok(user))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ApiResponse<DeleteResponse>> {
    let id = user_id(id)?;
    state.store.delete(id).await?;

    info!("Deleted user {}", id);
    Ok(ApiResponse::ok(DeleteResponse {
        message: "User deleted successfully".to_string(),
    }))
}
