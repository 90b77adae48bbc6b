//! Repository for the `projets` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::projet::{CreateProjet, Projet, UpdateProjet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, nom, description, statut, created_at, updated_at";

/// Provides CRUD operations for projects.
///
/// Status changes are persisted here; reacting to them (freezing or
/// unfreezing link prices) is the price-freeze engine's job, driven by the
/// API handler that observed the before/after values.
pub struct ProjetRepo;

impl ProjetRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `statut` is `None` in the input, defaults to `draft`.
    pub async fn create(pool: &PgPool, input: &CreateProjet) -> Result<Projet, sqlx::Error> {
        let query = format!(
            "INSERT INTO projets (client_id, nom, description, statut)
             VALUES ($1, $2, $3, COALESCE($4, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Projet>(&query)
            .bind(input.client_id)
            .bind(&input.nom)
            .bind(&input.description)
            .bind(&input.statut)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Projet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projets WHERE id = $1");
        sqlx::query_as::<_, Projet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Projet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projets ORDER BY created_at DESC");
        sqlx::query_as::<_, Projet>(&query).fetch_all(pool).await
    }

    /// List all projects belonging to one client, most recent first.
    pub async fn list_by_client(pool: &PgPool, client_id: DbId) -> Result<Vec<Projet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projets WHERE client_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Projet>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjet,
    ) -> Result<Option<Projet>, sqlx::Error> {
        let query = format!(
            "UPDATE projets SET
                client_id = COALESCE($2, client_id),
                nom = COALESCE($3, nom),
                description = COALESCE($4, description),
                statut = COALESCE($5, statut)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Projet>(&query)
            .bind(id)
            .bind(input.client_id)
            .bind(&input.nom)
            .bind(&input.description)
            .bind(&input.statut)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Links in `projet_produits` cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
