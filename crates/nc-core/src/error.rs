//! Centralized error types for NewsCredible.

use thiserror::Error;

/// Main error type for tool operations.
///
/// Submissions fail in exactly two user-visible ways: the input never
/// left the page (`Validation`) or the backend round-trip failed
/// (`BackendStatus`, `Transport`, `Decode`).
#[derive(Error, Debug)]
pub enum NcError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backend returned status {status}")]
    BackendStatus { status: u16 },

    #[error("Request error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tool operations.
pub type NcResult<T> = Result<T, NcError>;

impl NcError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this error was caught before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
