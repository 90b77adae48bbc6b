//! Handlers for the `/projets` resource.
//!
//! The update handler is the integration point of the price-freeze engine:
//! it records the status stored before the write and reports the
//! before/after pair to the engine once the update is durable.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::pricing::FreezeAction;
use atelier_core::types::DbId;
use atelier_db::models::projet::{CreateProjet, Projet, UpdateProjet};
use atelier_db::repositories::ProjetRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjet>,
) -> AppResult<(StatusCode, Json<Projet>)> {
    let projet = ProjetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(projet)))
}

/// GET /api/v1/projets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Projet>>> {
    let projets = ProjetRepo::list(&state.pool).await?;
    Ok(Json(projets))
}

/// GET /api/v1/projets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Projet>> {
    let projet = ProjetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id,
        }))?;
    Ok(Json(projet))
}

/// PUT /api/v1/projets/{id}
///
/// If the update changed `statut`, the price-freeze engine runs after the
/// row is durably updated. An engine failure surfaces as an error while
/// the status change itself stays committed; re-submitting the same status
/// completes the frozen-price batch.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjet>,
) -> AppResult<Json<Projet>> {
    let before = ProjetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id,
        }))?;

    let projet = ProjetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id,
        }))?;

    let action = state
        .pricing
        .on_status_change(projet.id, &before.statut, &projet.statut)
        .await?;
    if action != FreezeAction::None {
        tracing::info!(
            projet_id = projet.id,
            old_statut = %before.statut,
            new_statut = %projet.statut,
            ?action,
            "Project price freeze state changed"
        );
    }

    Ok(Json(projet))
}

/// DELETE /api/v1/projets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id,
        }))
    }
}
