//! Handlers for the `/composants` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::composant::{Composant, CreateComposant, UpdateComposant};
use atelier_db::repositories::ComposantRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/composants
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateComposant>,
) -> AppResult<(StatusCode, Json<Composant>)> {
    let composant = ComposantRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(composant)))
}

/// GET /api/v1/composants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Composant>>> {
    let composants = ComposantRepo::list(&state.pool).await?;
    Ok(Json(composants))
}

/// GET /api/v1/composants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Composant>> {
    let composant = ComposantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Composant",
            id,
        }))?;
    Ok(Json(composant))
}

/// PUT /api/v1/composants/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComposant>,
) -> AppResult<Json<Composant>> {
    let composant = ComposantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Composant",
            id,
        }))?;
    Ok(Json(composant))
}

/// DELETE /api/v1/composants/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ComposantRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Composant",
            id,
        }))
    }
}
