//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod client_repo;
pub mod composant_repo;
pub mod produit_repo;
pub mod projet_produit_repo;
pub mod projet_repo;

pub use client_repo::ClientRepo;
pub use composant_repo::ComposantRepo;
pub use produit_repo::ProduitRepo;
pub use projet_produit_repo::ProjetProduitRepo;
pub use projet_repo::ProjetRepo;
