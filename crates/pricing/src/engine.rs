//! Freeze/unfreeze orchestration over a [`LinkPriceStore`].

use async_trait::async_trait;
use atelier_core::pricing::{classify_transition, FreezeAction};
use atelier_core::types::{Centimes, DbId};

use crate::error::{BoxError, PricingError};

/// One project-product link as the engine sees it: the stored snapshot and
/// the product's current live price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPrice {
    pub link_id: DbId,
    /// `prix_unitaire_fige`; `None` while the link tracks the live catalog.
    pub frozen: Option<Centimes>,
    /// The product's `prix_vente_total` at read time. No snapshot isolation
    /// is promised: a catalog edit racing a freeze yields a price current
    /// "at approximately freeze time".
    pub live: Option<Centimes>,
}

/// Narrow persistence capability the engine operates through.
///
/// Errors are returned boxed and unclassified; the engine wraps them into
/// [`PricingError::Read`] / [`PricingError::Write`] without transformation.
#[async_trait]
pub trait LinkPriceStore: Send + Sync {
    /// All links of one project, each joined with its product's live price.
    async fn list_links(&self, projet_id: DbId) -> Result<Vec<LinkPrice>, BoxError>;

    /// Persist one link's frozen price (`Some` to freeze, `None` to clear).
    async fn set_frozen_price(&self, link_id: DbId, prix: Option<Centimes>)
        -> Result<(), BoxError>;

    /// Clear the frozen price of every link of one project in a single
    /// bulk update.
    async fn clear_frozen_prices(&self, projet_id: DbId) -> Result<(), BoxError>;
}

/// Drives price freezing from project status transitions.
///
/// [`PriceFreezeEngine::on_status_change`] is the only entry point: callers
/// report the before/after status values observed when the status column
/// was durably updated, and the engine decides whether anything must be
/// done. The freeze and unfreeze batches are deliberately not public, so
/// the stored state can only diverge from the status through a store
/// fault — which an idempotent re-invocation repairs.
pub struct PriceFreezeEngine<S> {
    store: S,
}

impl<S: LinkPriceStore> PriceFreezeEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// React to a project status transition.
    ///
    /// Classifies `(old, new)`, runs the matching batch, and returns the
    /// action taken. `FreezeAction::None` performs no store access at all.
    /// The first store fault is surfaced untransformed; partially applied
    /// freezes are left as written.
    pub async fn on_status_change(
        &self,
        projet_id: DbId,
        old: &str,
        new: &str,
    ) -> Result<FreezeAction, PricingError> {
        let action = classify_transition(old, new);
        match action {
            FreezeAction::Freeze => self.freeze(projet_id).await?,
            FreezeAction::Unfreeze => self.unfreeze(projet_id).await?,
            FreezeAction::None => {}
        }
        Ok(action)
    }

    /// Snapshot the live price onto every link not already frozen.
    ///
    /// Links carrying a snapshot are left untouched, so freezing twice in a
    /// row stores the same state as freezing once, and a link attached
    /// after the project left draft is picked up by the next invocation. A
    /// project with zero links is a successful no-op.
    async fn freeze(&self, projet_id: DbId) -> Result<(), PricingError> {
        let links = self
            .store
            .list_links(projet_id)
            .await
            .map_err(PricingError::Read)?;

        let mut frozen_count = 0u32;
        for link in links.iter().filter(|l| l.frozen.is_none()) {
            let prix = match link.live {
                Some(prix) => prix,
                None => {
                    // A link pointing at a price-less product. Freeze 0 so
                    // the snapshot is never left unset, but say so loudly:
                    // this is a catalog data problem, not a normal path.
                    tracing::warn!(
                        projet_id,
                        link_id = link.link_id,
                        "Freezing 0 for a link whose product has no live price"
                    );
                    0
                }
            };
            self.store
                .set_frozen_price(link.link_id, Some(prix))
                .await
                .map_err(PricingError::Write)?;
            frozen_count += 1;
        }

        tracing::debug!(projet_id, frozen_count, "Project prices frozen");
        Ok(())
    }

    /// Clear every link's frozen price, unconditionally.
    async fn unfreeze(&self, projet_id: DbId) -> Result<(), PricingError> {
        self.store
            .clear_frozen_prices(projet_id)
            .await
            .map_err(PricingError::Write)?;
        tracing::debug!(projet_id, "Project prices unfrozen");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// In-memory store: link_id -> (frozen, live), with call counters and
    /// an optional poisoned link id whose write fails.
    #[derive(Default)]
    struct FakeStore {
        links: Mutex<BTreeMap<DbId, (Option<Centimes>, Option<Centimes>)>>,
        list_calls: AtomicU32,
        write_calls: AtomicU32,
        fail_write_on: Option<DbId>,
    }

    impl FakeStore {
        fn with_links(entries: &[(DbId, Option<Centimes>, Option<Centimes>)]) -> Self {
            let store = Self::default();
            {
                let mut links = store.links.lock().unwrap();
                for &(id, frozen, live) in entries {
                    links.insert(id, (frozen, live));
                }
            }
            store
        }

        fn frozen_of(&self, link_id: DbId) -> Option<Centimes> {
            self.links.lock().unwrap()[&link_id].0
        }
    }

    #[async_trait]
    impl LinkPriceStore for &FakeStore {
        async fn list_links(&self, _projet_id: DbId) -> Result<Vec<LinkPrice>, BoxError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .links
                .lock()
                .unwrap()
                .iter()
                .map(|(&link_id, &(frozen, live))| LinkPrice {
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
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_write_on == Some(link_id) {
                return Err("link row is gone".into());
            }
            self.links.lock().unwrap().get_mut(&link_id).unwrap().0 = prix;
            Ok(())
        }

        async fn clear_frozen_prices(&self, _projet_id: DbId) -> Result<(), BoxError> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            for entry in self.links.lock().unwrap().values_mut() {
                entry.0 = None;
            }
            Ok(())
        }
    }

    const PROJET: DbId = 7;

    #[tokio::test]
    async fn draft_to_confirme_freezes_live_prices() {
        let store = FakeStore::with_links(&[(1, None, Some(100)), (2, None, Some(250))]);
        let engine = PriceFreezeEngine::new(&store);

        let action = engine
            .on_status_change(PROJET, "draft", "confirme")
            .await
            .unwrap();

        assert_eq!(action, FreezeAction::Freeze);
        assert_eq!(store.frozen_of(1), Some(100));
        assert_eq!(store.frozen_of(2), Some(250));
    }

    #[tokio::test]
    async fn confirme_to_draft_clears_all_frozen_prices() {
        let store = FakeStore::with_links(&[(1, Some(100), Some(100)), (2, Some(250), Some(300))]);
        let engine = PriceFreezeEngine::new(&store);

        let action = engine
            .on_status_change(PROJET, "confirme", "draft")
            .await
            .unwrap();

        assert_eq!(action, FreezeAction::Unfreeze);
        assert_eq!(store.frozen_of(1), None);
        assert_eq!(store.frozen_of(2), None);
    }

    #[tokio::test]
    async fn priced_to_priced_performs_no_store_access() {
        let store = FakeStore::with_links(&[(1, Some(100), Some(500))]);
        let engine = PriceFreezeEngine::new(&store);

        let action = engine
            .on_status_change(PROJET, "confirme", "termine")
            .await
            .unwrap();

        assert_eq!(action, FreezeAction::None);
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.write_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.frozen_of(1), Some(100));
    }

    #[tokio::test]
    async fn draft_to_draft_performs_no_store_access() {
        let store = FakeStore::with_links(&[(1, None, Some(100))]);
        let engine = PriceFreezeEngine::new(&store);

        let action = engine
            .on_status_change(PROJET, "draft", "draft")
            .await
            .unwrap();

        assert_eq!(action, FreezeAction::None);
        assert_eq!(store.write_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_live_price_freezes_zero() {
        let store = FakeStore::with_links(&[(1, None, None), (2, None, Some(50))]);
        let engine = PriceFreezeEngine::new(&store);

        engine
            .on_status_change(PROJET, "draft", "confirme")
            .await
            .unwrap();

        assert_eq!(store.frozen_of(1), Some(0));
        assert_eq!(store.frozen_of(2), Some(50));
    }

    #[tokio::test]
    async fn freezing_twice_is_idempotent() {
        let store = FakeStore::with_links(&[(1, None, Some(100))]);
        let engine = PriceFreezeEngine::new(&store);

        engine
            .on_status_change(PROJET, "draft", "confirme")
            .await
            .unwrap();
        assert_eq!(store.frozen_of(1), Some(100));

        // The live price moves; a second freeze must not re-snapshot.
        store.links.lock().unwrap().get_mut(&1).unwrap().1 = Some(999);
        engine
            .on_status_change(PROJET, "draft", "confirme")
            .await
            .unwrap();

        assert_eq!(store.frozen_of(1), Some(100));
    }

    #[tokio::test]
    async fn refreeze_picks_up_links_added_after_the_first_freeze() {
        let store = FakeStore::with_links(&[(1, Some(100), Some(100))]);
        let engine = PriceFreezeEngine::new(&store);

        // A new unfrozen link appears while the project is non-draft.
        store.links.lock().unwrap().insert(3, (None, Some(50)));

        engine
            .on_status_change(PROJET, "draft", "confirme")
            .await
            .unwrap();

        assert_eq!(store.frozen_of(1), Some(100));
        assert_eq!(store.frozen_of(3), Some(50));
    }

    #[tokio::test]
    async fn unfreezing_twice_is_idempotent() {
        let store = FakeStore::with_links(&[(1, Some(100), Some(100))]);
        let engine = PriceFreezeEngine::new(&store);

        engine
            .on_status_change(PROJET, "confirme", "draft")
            .await
            .unwrap();
        engine
            .on_status_change(PROJET, "confirme", "draft")
            .await
            .unwrap();

        assert_eq!(store.frozen_of(1), None);
    }

    #[tokio::test]
    async fn project_with_zero_links_freezes_without_writes() {
        let store = FakeStore::default();
        let engine = PriceFreezeEngine::new(&store);

        let action = engine
            .on_status_change(PROJET, "draft", "confirme")
            .await
            .unwrap();

        assert_eq!(action, FreezeAction::Freeze);
        assert_eq!(store.write_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn write_failure_aborts_batch_and_keeps_earlier_updates() {
        let mut store =
            FakeStore::with_links(&[(1, None, Some(100)), (2, None, Some(200)), (3, None, Some(300))]);
        store.fail_write_on = Some(2);
        let engine = PriceFreezeEngine::new(&store);

        let err = engine
            .on_status_change(PROJET, "draft", "confirme")
            .await
            .unwrap_err();

        assert_matches!(err, PricingError::Write(_));
        // Link 1 was written before the fault, link 3 never attempted.
        assert_eq!(store.frozen_of(1), Some(100));
        assert_eq!(store.frozen_of(2), None);
        assert_eq!(store.frozen_of(3), None);

        // Re-invocation completes the batch once the fault clears.
        let store2 = FakeStore::with_links(&[
            (1, store.frozen_of(1), Some(100)),
            (2, None, Some(200)),
            (3, None, Some(300)),
        ]);
        let engine2 = PriceFreezeEngine::new(&store2);
        engine2
            .on_status_change(PROJET, "draft", "confirme")
            .await
            .unwrap();
        assert_eq!(store2.frozen_of(1), Some(100));
        assert_eq!(store2.frozen_of(2), Some(200));
        assert_eq!(store2.frozen_of(3), Some(300));
    }
}
