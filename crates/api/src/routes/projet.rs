//! Route definitions for the `/projets` resource.
//!
//! Also nests project-product link routes under `/projets/{projet_id}/produits`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{projet, projet_produit};
use crate::state::AppState;

/// Routes mounted at `/projets`.
///
/// ```text
/// GET    /                             -> list
/// POST   /                             -> create
/// GET    /{id}                         -> get_by_id
/// PUT    /{id}                         -> update (drives the price freeze)
/// DELETE /{id}                         -> delete
///
/// GET    /{projet_id}/produits         -> list_by_projet (with prix_effectif)
/// POST   /{projet_id}/produits         -> create (attach)
/// PUT    /{projet_id}/produits/{id}    -> update (quantity)
/// DELETE /{projet_id}/produits/{id}    -> delete (detach)
/// ```
pub fn router() -> Router<AppState> {
    let link_routes = Router::new()
        .route(
            "/",
            get(projet_produit::list_by_projet).post(projet_produit::create),
        )
        .route(
            "/{id}",
            axum::routing::put(projet_produit::update).delete(projet_produit::delete),
        );

    Router::new()
        .route("/", get(projet::list).post(projet::create))
        .route(
            "/{id}",
            get(projet::get_by_id)
                .put(projet::update)
                .delete(projet::delete),
        )
        .nest("/{projet_id}/produits", link_routes)
}
