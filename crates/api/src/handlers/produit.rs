//! Handlers for the `/produits` resource.
//!
//! Catalog edits here change the live price only. Projects that have left
//! draft keep their frozen link prices regardless of what happens to the
//! catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::produit::{CreateProduit, Produit, UpdateProduit};
use atelier_db::repositories::ProduitRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/produits
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduit>,
) -> AppResult<(StatusCode, Json<Produit>)> {
    let produit = ProduitRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(produit)))
}

/// GET /api/v1/produits
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Produit>>> {
    let produits = ProduitRepo::list(&state.pool).await?;
    Ok(Json(produits))
}

/// GET /api/v1/produits/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Produit>> {
    let produit = ProduitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Produit",
            id,
        }))?;
    Ok(Json(produit))
}

/// PUT /api/v1/produits/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduit>,
) -> AppResult<Json<Produit>> {
    let produit = ProduitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Produit",
            id,
        }))?;
    Ok(Json(produit))
}

/// DELETE /api/v1/produits/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProduitRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Produit",
            id,
        }))
    }
}
