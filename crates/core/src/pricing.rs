//! Pure price-freezing rules.
//!
//! A project in `draft` shows live catalog prices; any other status shows
//! prices snapshotted at the moment the project left `draft`. This module
//! holds the two pure pieces of that subsystem: classifying a status
//! transition into a freeze action, and resolving the price a project line
//! currently displays. The stateful batch operations live in
//! `atelier-pricing`.

use crate::statut::STATUT_DRAFT;
use crate::types::Centimes;

/// What the price-freeze engine must do for a given status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeAction {
    /// Entering a priced state: snapshot live prices onto the links.
    Freeze,
    /// Returning to draft: clear every snapshot.
    Unfreeze,
    /// No boundary crossed; leave stored prices untouched.
    None,
}

/// Whether a project in this status carries frozen prices.
///
/// Every status except `draft` is a priced state. New labels added by the
/// console are priced by default, so a typo'd status freezes rather than
/// silently floating.
pub fn needs_freeze(statut: &str) -> bool {
    statut != STATUT_DRAFT
}

/// Classify a status transition. Total over all string pairs; never errors.
///
/// Transitions between two priced states return [`FreezeAction::None`]:
/// prices were frozen on the way out of draft and stay as they are.
pub fn classify_transition(old: &str, new: &str) -> FreezeAction {
    match (needs_freeze(old), needs_freeze(new)) {
        (false, true) => FreezeAction::Freeze,
        (true, false) => FreezeAction::Unfreeze,
        _ => FreezeAction::None,
    }
}

/// The price a project line currently shows for its product.
///
/// Single source of truth for the read path: the frozen snapshot wins, then
/// the live catalog price, then 0 for a price-less product.
pub fn effective_price(frozen: Option<Centimes>, live: Option<Centimes>) -> Centimes {
    frozen.or(live).unwrap_or(0)
}
