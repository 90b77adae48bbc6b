use std::sync::Arc;

use atelier_pricing::{PgLinkStore, PriceFreezeEngine};

use crate::auth_admin::AuthAdminApi;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Price-freeze engine bound to the live Postgres store.
    pub pricing: Arc<PriceFreezeEngine<PgLinkStore>>,
    /// Identity provider admin API (trait object so tests can stub it).
    pub auth_admin: Arc<dyn AuthAdminApi>,
}
