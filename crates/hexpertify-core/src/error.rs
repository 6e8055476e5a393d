//! Core domain errors.

use thiserror::Error;

use crate::profile::ValidationErrors;

/// Core domain errors for Hexpertify.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Profile not found.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// One or more form fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture or record could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
