//! Route definitions for the `/produits` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::produit;
use crate::state::AppState;

/// Routes mounted at `/produits`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(produit::list).post(produit::create))
        .route(
            "/{id}",
            get(produit::get_by_id)
                .put(produit::update)
                .delete(produit::delete),
        )
}
