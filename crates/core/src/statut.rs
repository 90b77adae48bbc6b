//! Well-known project status labels.
//!
//! Project statuses are free-form TEXT in the `projets.statut` column; the
//! console adds new labels without a schema change. Only [`STATUT_DRAFT`]
//! carries semantics: it is the single "unpriced" state in which product
//! prices float with the live catalog (see [`crate::pricing`]).

/// The distinguished unpriced status. Everything else is a priced state.
pub const STATUT_DRAFT: &str = "draft";

/// The project has been confirmed by the client.
pub const STATUT_CONFIRME: &str = "confirme";

/// Work on the project is underway.
pub const STATUT_EN_COURS: &str = "en_cours";

/// The project is finished and delivered.
pub const STATUT_TERMINE: &str = "termine";

/// The project was cancelled; its frozen prices are kept for the record.
pub const STATUT_ANNULE: &str = "annule";
