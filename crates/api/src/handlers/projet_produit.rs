//! Handlers for the `/projets/{projet_id}/produits` resource (links).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use atelier_core::error::CoreError;
use atelier_core::pricing::effective_price;
use atelier_core::types::{Centimes, DbId};
use atelier_db::models::projet_produit::{
    CreateProjetProduit, ProjetProduit, ProjetProduitDetail, UpdateProjetProduit,
};
use atelier_db::repositories::ProjetProduitRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A project line as displayed: the link joined with its product, plus the
/// resolved price (frozen snapshot first, then live, then 0).
#[derive(Debug, Serialize)]
pub struct LigneProduit {
    #[serde(flatten)]
    pub detail: ProjetProduitDetail,
    pub prix_effectif: Centimes,
}

/// GET /api/v1/projets/{projet_id}/produits
pub async fn list_by_projet(
    State(state): State<AppState>,
    Path(projet_id): Path<DbId>,
) -> AppResult<Json<Vec<LigneProduit>>> {
    let lignes = ProjetProduitRepo::list_by_projet(&state.pool, projet_id)
        .await?
        .into_iter()
        .map(|detail| LigneProduit {
            prix_effectif: effective_price(detail.prix_unitaire_fige, detail.prix_vente_total),
            detail,
        })
        .collect();
    Ok(Json(lignes))
}

/// POST /api/v1/projets/{projet_id}/produits
///
/// Attaches a product. The frozen price is never set here: a link created
/// while the project is non-draft stays unfrozen until the next freeze
/// pass picks it up.
pub async fn create(
    State(state): State<AppState>,
    Path(projet_id): Path<DbId>,
    Json(input): Json<CreateProjetProduit>,
) -> AppResult<(StatusCode, Json<ProjetProduit>)> {
    let link = ProjetProduitRepo::create(&state.pool, projet_id, &input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// PUT /api/v1/projets/{projet_id}/produits/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((projet_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjetProduit>,
) -> AppResult<Json<ProjetProduit>> {
    let link = ProjetProduitRepo::update(&state.pool, projet_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjetProduit",
            id,
        }))?;
    Ok(Json(link))
}

/// DELETE /api/v1/projets/{projet_id}/produits/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((projet_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ProjetProduitRepo::delete(&state.pool, projet_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjetProduit",
            id,
        }))
    }
}
