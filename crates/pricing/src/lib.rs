//! Price-freeze engine.
//!
//! Snapshots product prices onto a project's links when the project leaves
//! `draft`, and clears the snapshots when it returns. The engine reads and
//! writes through the [`LinkPriceStore`] capability so the API layer can
//! hand it a live Postgres store while tests substitute an in-memory fake.
//!
//! The pure transition rules live in `atelier_core::pricing`; this crate
//! owns the batch operations and their persistence.

pub mod engine;
pub mod error;
pub mod pg_store;

pub use engine::{LinkPrice, LinkPriceStore, PriceFreezeEngine};
pub use error::{BoxError, PricingError};
pub use pg_store::PgLinkStore;
