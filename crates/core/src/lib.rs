//! Atelier domain foundation.
//!
//! Pure domain types and business rules shared by the database, pricing,
//! and API layers. This crate has no I/O: the price-freezing decision logic
//! lives here precisely so it can be exercised without a database.

pub mod error;
pub mod pricing;
pub mod statut;
pub mod types;

pub use error::CoreError;
