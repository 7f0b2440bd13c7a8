//! Custom error types for bizbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for bizbook operations
#[derive(Error, Debug)]
pub enum BizbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors (bad input, refused wizard transitions)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Preference store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A module id outside the fixed catalog
    #[error("Unknown module: {0}")]
    UnknownModule(String),
}

impl BizbookError {
    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BizbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BizbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for bizbook operations
pub type BizbookResult<T> = Result<T, BizbookError>;
