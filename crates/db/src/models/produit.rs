//! Produit (product) entity model and DTOs.

use atelier_core::types::{Centimes, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `produits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Produit {
    pub id: DbId,
    pub nom: String,
    pub description: Option<String>,
    /// Live catalog sale price in centimes. Projects that have left draft
    /// no longer track this value (see `projet_produits.prix_unitaire_fige`).
    pub prix_vente_total: Option<Centimes>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduit {
    pub nom: String,
    pub description: Option<String>,
    pub prix_vente_total: Option<Centimes>,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduit {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub prix_vente_total: Option<Centimes>,
}
