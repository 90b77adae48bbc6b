//! Repository for the `composants` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::composant::{Composant, CreateComposant, UpdateComposant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nom, reference, fournisseur, prix_unitaire, created_at, updated_at";

/// Provides CRUD operations for components.
pub struct ComposantRepo;

impl ComposantRepo {
    /// Insert a new component, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComposant) -> Result<Composant, sqlx::Error> {
        let query = format!(
            "INSERT INTO composants (nom, reference, fournisseur, prix_unitaire)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Composant>(&query)
            .bind(&input.nom)
            .bind(&input.reference)
            .bind(&input.fournisseur)
            .bind(input.prix_unitaire)
            .fetch_one(pool)
            .await
    }

    /// Find a component by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Composant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM composants WHERE id = $1");
        sqlx::query_as::<_, Composant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all components ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Composant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM composants ORDER BY nom ASC");
        sqlx::query_as::<_, Composant>(&query).fetch_all(pool).await
    }

    /// Update a component. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComposant,
    ) -> Result<Option<Composant>, sqlx::Error> {
        let query = format!(
            "UPDATE composants SET
                nom = COALESCE($2, nom),
                reference = COALESCE($3, reference),
                fournisseur = COALESCE($4, fournisseur),
                prix_unitaire = COALESCE($5, prix_unitaire)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Composant>(&query)
            .bind(id)
            .bind(&input.nom)
            .bind(&input.reference)
            .bind(&input.fournisseur)
            .bind(input.prix_unitaire)
            .fetch_optional(pool)
            .await
    }

    /// Delete a component by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM composants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
