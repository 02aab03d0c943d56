//! User management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User},
};

use super::MessageResponse;

/// Insert acknowledgment, driver-shaped
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertAcknowledgment {
    pub acknowledged: bool,
    /// Hex identifier assigned to the inserted document
    pub inserted_id: String,
}

/// Delete acknowledgment, driver-shaped
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAcknowledgment {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list().await?;
    Ok(Json(users))
}

/// Add a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "Insert acknowledgment", body = InsertAcknowledgment),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(user): Json<CreateUser>,
) -> AppResult<Json<InsertAcknowledgment>> {
    let inserted_id = state.services.users.create(user).await?;
    Ok(Json(InsertAcknowledgment {
        acknowledged: true,
        inserted_id: inserted_id.to_hex(),
    }))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User identifier (24-char hex)")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(user): Json<UpdateUser>,
) -> AppResult<Json<MessageResponse>> {
    state.services.users.update(&id, user).await?;
    Ok(Json(MessageResponse::new("User updated successfully!")))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User identifier (24-char hex)")
    ),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAcknowledgment),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAcknowledgment>> {
    let deleted_count = state.services.users.delete(&id).await?;
    Ok(Json(DeleteAcknowledgment {
        acknowledged: true,
        deleted_count,
    }))
}
