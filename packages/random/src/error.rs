//! Comprehensive error handling for random string generation

use thiserror::Error;

/// Random generation errors
#[derive(Debug, Error)]
pub enum RandomError {
    /// The cryptographic byte source could not supply bytes
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),

    /// A generation option was rejected before any bytes were requested
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RandomError {
    /// Create an `entropy_unavailable` error
    pub fn entropy_unavailable(msg: impl Into<String>) -> Self {
        Self::EntropyUnavailable(msg.into())
    }

    /// Create an `invalid_option` error
    pub fn invalid_option(msg: impl Into<String>) -> Self {
        Self::InvalidOption(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error came from the byte source rather than the caller
    #[must_use]
    pub fn is_entropy_failure(&self) -> bool {
        matches!(self, Self::EntropyUnavailable(_))
    }
}

impl From<getrandom::Error> for RandomError {
    fn from(err: getrandom::Error) -> Self {
        Self::EntropyUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for RandomError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOption(err.to_string())
    }
}

/// Result type for random generation operations
pub type Result<T> = std::result::Result<T, RandomError>;
