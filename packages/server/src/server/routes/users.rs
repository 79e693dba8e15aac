use anyhow::Context;
use axum::extract::{Extension, Path};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::user::models::{NewUser, User};
use crate::server::app::AppState;
use crate::server::routes::InsertResponse;

/// POST /users - create the user unless the email is already registered.
///
/// The duplicate case is soft idempotence: success with a null id, not an
/// error, so sign-in flows can call this unconditionally.
pub async fn create_user(
    Extension(state): Extension<AppState>,
    Json(new_user): Json<NewUser>,
) -> Result<Json<InsertResponse>, ApiError> {
    if state
        .store
        .find_user_by_email(&new_user.email)
        .await?
        .is_some()
    {
        return Ok(Json(InsertResponse {
            success: true,
            inserted_id: None,
        }));
    }

    let inserted_id = state.store.insert_user(&new_user).await?;

    Ok(Json(InsertResponse {
        success: true,
        inserted_id: Some(inserted_id),
    }))
}

/// GET /users - list all users
pub async fn list_users(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.store.list_users().await?))
}

#[derive(Serialize)]
pub struct UserResponse {
    success: bool,
    user: User,
}

/// GET /users/:email - fetch one user by email
pub async fn get_user_by_email(
    Extension(state): Extension<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    match state.store.find_user_by_email(&email).await? {
        Some(user) => Ok(Json(UserResponse {
            success: true,
            user,
        })),
        None => Err(ApiError::NotFound("User not found".to_string())),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    success: bool,
    deleted_id: Uuid,
}

/// DELETE /users/:id - delete a user by identifier
pub async fn delete_user(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let id: Uuid = id.parse().context("Invalid user id")?;

    let _removed = state.store.delete_user(id).await?;

    Ok(Json(DeleteUserResponse {
        success: true,
        deleted_id: id,
    }))
}
