//! Route definitions.

pub mod admin;
pub mod client;
pub mod composant;
pub mod health;
pub mod produit;
pub mod projet;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                            list, create
/// /clients/{id}                       get, update, delete
///
/// /composants                         list, create
/// /composants/{id}                    get, update, delete
///
/// /produits                           list, create
/// /produits/{id}                      get, update, delete
///
/// /projets                            list, create
/// /projets/{id}                       get, update (drives price freeze), delete
/// /projets/{projet_id}/produits       list (with effective prices), attach
/// /projets/{projet_id}/produits/{id}  update quantity, detach
///
/// /admin/users                        list, invite (identity provider passthrough)
/// /admin/users/{id}                   delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/composants", composant::router())
        .nest("/produits", produit::router())
        .nest("/projets", projet::router())
        .nest("/admin", admin::router())
}
