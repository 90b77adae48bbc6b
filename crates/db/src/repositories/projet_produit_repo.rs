//! Repository for the `projet_produits` table (project-product links).
//!
//! Links are created and deleted by the product-assignment workflow; the
//! `prix_unitaire_fige` column is written exclusively by the price-freeze
//! engine's store (`atelier-pricing`), never through this repository.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::projet_produit::{
    CreateProjetProduit, ProjetProduit, ProjetProduitDetail, UpdateProjetProduit,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, projet_id, produit_id, quantite, prix_unitaire_fige, created_at, updated_at";

/// Provides link management for project-product associations.
pub struct ProjetProduitRepo;

impl ProjetProduitRepo {
    /// Attach a product to a project, returning the created link.
    ///
    /// If `quantite` is `None` in the input, defaults to 1. Attaching the
    /// same product twice violates `uq_projet_produits_projet_produit`.
    pub async fn create(
        pool: &PgPool,
        projet_id: DbId,
        input: &CreateProjetProduit,
    ) -> Result<ProjetProduit, sqlx::Error> {
        let query = format!(
            "INSERT INTO projet_produits (projet_id, produit_id, quantite)
             VALUES ($1, $2, COALESCE($3, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjetProduit>(&query)
            .bind(projet_id)
            .bind(input.produit_id)
            .bind(input.quantite)
            .fetch_one(pool)
            .await
    }

    /// Find a link by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjetProduit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projet_produits WHERE id = $1");
        sqlx::query_as::<_, ProjetProduit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's links joined with each product's name and live
    /// price, ordered by product name ascending.
    pub async fn list_by_projet(
        pool: &PgPool,
        projet_id: DbId,
    ) -> Result<Vec<ProjetProduitDetail>, sqlx::Error> {
        sqlx::query_as::<_, ProjetProduitDetail>(
            "SELECT pp.id, pp.projet_id, pp.produit_id, p.nom AS produit_nom,
                    pp.quantite, pp.prix_unitaire_fige, p.prix_vente_total
             FROM projet_produits pp
             JOIN produits p ON p.id = pp.produit_id
             WHERE pp.projet_id = $1
             ORDER BY p.nom ASC",
        )
        .bind(projet_id)
        .fetch_all(pool)
        .await
    }

    /// Update a link's quantity. Only non-`None` fields in `input` are
    /// applied. Returns `None` if no row with the given `id` exists within
    /// the project.
    pub async fn update(
        pool: &PgPool,
        projet_id: DbId,
        id: DbId,
        input: &UpdateProjetProduit,
    ) -> Result<Option<ProjetProduit>, sqlx::Error> {
        let query = format!(
            "UPDATE projet_produits SET
                quantite = COALESCE($3, quantite)
             WHERE id = $2 AND projet_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjetProduit>(&query)
            .bind(projet_id)
            .bind(id)
            .bind(input.quantite)
            .fetch_optional(pool)
            .await
    }

    /// Detach a link from a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, projet_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projet_produits WHERE id = $1 AND projet_id = $2")
            .bind(id)
            .bind(projet_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
