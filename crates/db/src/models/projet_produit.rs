//! Projet-produit link model and DTOs.
//!
//! A link attaches one product to one project with a quantity. Its
//! `prix_unitaire_fige` column is owned by the price-freeze engine: NULL
//! while the project is in draft, snapshotted when the project leaves it.

use atelier_core::types::{Centimes, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A link row from the `projet_produits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjetProduit {
    pub id: DbId,
    pub projet_id: DbId,
    pub produit_id: DbId,
    pub quantite: i32,
    /// Snapshotted unit price in centimes; NULL = tracking the live catalog.
    pub prix_unitaire_fige: Option<Centimes>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A link joined with its product's name and live price, as displayed on
/// the project detail page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjetProduitDetail {
    pub id: DbId,
    pub projet_id: DbId,
    pub produit_id: DbId,
    pub produit_nom: String,
    pub quantite: i32,
    pub prix_unitaire_fige: Option<Centimes>,
    pub prix_vente_total: Option<Centimes>,
}

/// DTO for attaching a product to a project.
///
/// There is deliberately no `prix_unitaire_fige` field here: the frozen
/// price is never set through the assignment workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjetProduit {
    pub produit_id: DbId,
    /// Defaults to 1 if omitted.
    pub quantite: Option<i32>,
}

/// DTO for updating a link's quantity.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjetProduit {
    pub quantite: Option<i32>,
}
