/// User API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roster_core::{CreateUser, UpdateUser, User};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub success: bool,
    pub data: Vec<User>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub data: User,
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub success: bool,
    pub message: String,
    pub data: User,
}

/// GET /api/users - Get all users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>> {
    let data = state.store.list().await?;
    let count = data.len();

    Ok(Json(UserListResponse {
        success: true,
        data,
        count,
    }))
}

/// GET /api/users/:id - Get user by ID
pub async fn get_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>> {
    let user = state.store.get(&id).await?;

    Ok(Json(UserResponse {
        success: true,
        data: user,
    }))
}

/// POST /api/users - Create new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let user = state.store.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            data: user,
        }),
    ))
}

/// PUT /api/users/:id - Update user
pub async fn update_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<UserResponse>> {
    let user = state.store.update(&id, payload).await?;

    Ok(Json(UserResponse {
        success: true,
        data: user,
    }))
}

/// DELETE /api/users/:id - Delete user
pub async fn delete_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteUserResponse>> {
    let user = state.store.delete(&id).await?;

    Ok(Json(DeleteUserResponse {
        success: true,
        message: "User deleted successfully".to_string(),
        data: user,
    }))
}
