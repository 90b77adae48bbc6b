/// Boxed store fault, carried through unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from the price-freeze engine.
///
/// The engine never retries and never masks: the first store fault aborts
/// the batch and surfaces here. Links updated before the fault stay
/// updated; a later idempotent re-invocation completes the rest.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// Listing a project's links (with live prices) failed.
    #[error("Failed to read project product links: {0}")]
    Read(#[source] BoxError),

    /// Persisting a frozen-price update failed.
    #[error("Failed to update frozen price: {0}")]
    Write(#[source] BoxError),
}
