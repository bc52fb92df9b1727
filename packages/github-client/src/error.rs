//! Error types for the GitHub client.

use thiserror::Error;

/// Result type for GitHub client operations.
pub type Result<T> = std::result::Result<T, GithubError>;

/// GitHub client errors.
#[derive(Debug, Error)]
pub enum GithubError {
    /// Configuration error (missing or empty credentials)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout, undecodable body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response)
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Repository reference is not of the form `owner/repo`
    #[error("Invalid repository reference: {0:?}")]
    InvalidRepository(String),
}
