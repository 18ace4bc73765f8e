//! Domain error types
//!
//! Construction-time failures (pattern library, recognizer, configuration)
//! are fatal and surface through [`VeilError`]. Per-call detection failures
//! are recovered inside the engine and never reach callers as errors.

use thiserror::Error;

/// Main veil error type
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library errors (missing file, bad TOML, invalid regex)
    #[error("Pattern library error: {0}")]
    PatternLibrary(String),

    /// Entity recognizer initialization errors
    #[error("Recognizer error: {0}")]
    Recognizer(String),

    /// Invalid redaction policy name
    #[error("Unknown redaction policy: {0} (expected generic, mask or remove)")]
    UnknownPolicy(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
