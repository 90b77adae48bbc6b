//! Handlers for the `/admin/users` resource.
//!
//! Thin passthrough to the identity provider's admin API. The console does
//! not persist user records of its own.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth_admin::AdminUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request payload for inviting a user.
#[derive(Debug, Deserialize)]
pub struct InviteUser {
    pub email: String,
}

/// GET /api/v1/admin/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<AdminUser>>> {
    let users = state.auth_admin.list_users().await?;
    Ok(Json(users))
}

/// POST /api/v1/admin/users
pub async fn invite_user(
    State(state): State<AppState>,
    Json(input): Json<InviteUser>,
) -> AppResult<(StatusCode, Json<AdminUser>)> {
    if input.email.trim().is_empty() || !input.email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".into()));
    }
    let user = state.auth_admin.invite_user(input.email.trim()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /api/v1/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.auth_admin.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
