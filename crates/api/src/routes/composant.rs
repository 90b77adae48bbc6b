//! Route definitions for the `/composants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::composant;
use crate::state::AppState;

/// Routes mounted at `/composants`.
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
        .route("/", get(composant::list).post(composant::create))
        .route(
            "/{id}",
            get(composant::get_by_id)
                .put(composant::update)
                .delete(composant::delete),
        )
}
