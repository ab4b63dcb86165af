use thiserror::Error;

use crate::domain::OrderingViolation;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid version format: '{0}' - expected MAJOR.MINOR.PATCH")]
    InvalidFormat(String),

    #[error("{0}")]
    Regression(OrderingViolation),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Please provide a valid new version number")]
    MissingVersion,

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create an invalid-format error for the given input
    pub fn invalid_format(text: impl Into<String>) -> Self {
        BumpError::InvalidFormat(text.into())
    }

    /// Create an invalid-argument error for the offending token
    pub fn invalid_argument(token: impl Into<String>) -> Self {
        BumpError::InvalidArgument(token.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::Manifest(msg.into())
    }

    /// Create a commit error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        BumpError::Commit(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }
}
