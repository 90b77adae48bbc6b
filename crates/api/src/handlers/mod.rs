//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single resource. Handlers delegate to the
//! corresponding repository in `atelier_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod admin;
pub mod client;
pub mod composant;
pub mod produit;
pub mod projet;
pub mod projet_produit;
