//! Projet (project) entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Projet {
    pub id: DbId,
    pub client_id: DbId,
    pub nom: String,
    pub description: Option<String>,
    /// Free-form status label; only `draft` carries pricing semantics.
    pub statut: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjet {
    pub client_id: DbId,
    pub nom: String,
    pub description: Option<String>,
    /// Defaults to `draft` if omitted.
    pub statut: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// A `statut` change is what drives the price-freeze engine; the handler
/// compares the stored status against the updated one and reacts.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjet {
    pub client_id: Option<DbId>,
    pub nom: Option<String>,
    pub description: Option<String>,
    pub statut: Option<String>,
}
