//! Postgres-backed [`LinkPriceStore`].

use async_trait::async_trait;
use atelier_core::types::{Centimes, DbId};
use sqlx::PgPool;

use crate::engine::{LinkPrice, LinkPriceStore};
use crate::error::BoxError;

/// Reads and writes `projet_produits.prix_unitaire_fige` directly.
///
/// Each link update is an independent per-key write; the freeze loop is
/// not wrapped in a transaction (per-link updates are idempotent and a
/// re-run converges).
#[derive(Clone)]
pub struct PgLinkStore {
    pool: PgPool,
}

impl PgLinkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkPriceStore for PgLinkStore {
    async fn list_links(&self, projet_id: DbId) -> Result<Vec<LinkPrice>, BoxError> {
        let rows: Vec<(DbId, Option<Centimes>, Option<Centimes>)> = sqlx::query_as(
            "SELECT pp.id, pp.prix_unitaire_fige, p.prix_vente_total
             FROM projet_produits pp
             JOIN produits p ON p.id = pp.produit_id
             WHERE pp.projet_id = $1
             ORDER BY pp.id ASC",
        )
        .bind(projet_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(link_id, frozen, live)| LinkPrice {
                link_id,
                frozen,
                live,
            })
            .collect())
    }

    async fn set_frozen_price(
        &self,
        link_id: DbId,
        prix: Option<Centimes>,
    ) -> Result<(), BoxError> {
        sqlx::query("UPDATE projet_produits SET prix_unitaire_fige = $2 WHERE id = $1")
            .bind(link_id)
            .bind(prix)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn clear_frozen_prices(&self, projet_id: DbId) -> Result<(), BoxError> {
        sqlx::query("UPDATE projet_produits SET prix_unitaire_fige = NULL WHERE projet_id = $1")
            .bind(projet_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
