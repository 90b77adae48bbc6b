//! Atelier API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! identity-provider admin client) so integration tests and the binary
//! entrypoint can both access them.

pub mod auth_admin;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
