//! Composant (component) entity model and DTOs.

use atelier_core::types::{Centimes, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A component row from the `composants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Composant {
    pub id: DbId,
    pub nom: String,
    pub reference: Option<String>,
    pub fournisseur: Option<String>,
    /// Purchase price in centimes.
    pub prix_unitaire: Option<Centimes>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new component.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComposant {
    pub nom: String,
    pub reference: Option<String>,
    pub fournisseur: Option<String>,
    pub prix_unitaire: Option<Centimes>,
}

/// DTO for updating an existing component. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComposant {
    pub nom: Option<String>,
    pub reference: Option<String>,
    pub fournisseur: Option<String>,
    pub prix_unitaire: Option<Centimes>,
}
