//! Error types for listing hydration.

use thiserror::Error;

/// Result type for hydration operations.
pub type Result<T> = std::result::Result<T, HydrateError>;

/// Hydration errors. Both are fatal to the call and no partial result is
/// returned.
#[derive(Debug, Error)]
pub enum HydrateError {
    /// The metadata fetcher lacks the credentials it needs. Raised before any work.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The metadata fetcher failed. The original error is kept as the source.
    #[error("Metadata fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl HydrateError {
    /// The fetcher's error, if this is a fetch failure.
    pub fn fetch_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            HydrateError::Fetch(err) => Some(err.as_ref()),
            HydrateError::Config(_) => None,
        }
    }
}
