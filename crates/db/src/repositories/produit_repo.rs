//! Repository for the `produits` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::produit::{CreateProduit, Produit, UpdateProduit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nom, description, prix_vente_total, created_at, updated_at";

/// Provides CRUD operations for products.
///
/// Catalog edits through this repository never touch frozen link prices;
/// only the price-freeze engine writes `projet_produits.prix_unitaire_fige`.
pub struct ProduitRepo;

impl ProduitRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduit) -> Result<Produit, sqlx::Error> {
        let query = format!(
            "INSERT INTO produits (nom, description, prix_vente_total)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Produit>(&query)
            .bind(&input.nom)
            .bind(&input.description)
            .bind(input.prix_vente_total)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Produit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM produits WHERE id = $1");
        sqlx::query_as::<_, Produit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Produit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM produits ORDER BY nom ASC");
        sqlx::query_as::<_, Produit>(&query).fetch_all(pool).await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduit,
    ) -> Result<Option<Produit>, sqlx::Error> {
        let query = format!(
            "UPDATE produits SET
                nom = COALESCE($2, nom),
                description = COALESCE($3, description),
                prix_vente_total = COALESCE($4, prix_vente_total)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Produit>(&query)
            .bind(id)
            .bind(&input.nom)
            .bind(&input.description)
            .bind(input.prix_vente_total)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation if the product is still attached
    /// to a project.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM produits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
