//! Error types for the Monogatari library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`MonogatariError`] enum.
//!
//! # Examples
//!
//! ```
//! use monogatari::error::{MonogatariError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MonogatariError::tokenizer("malformed input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Monogatari operations.
///
/// Upstream collaborator failures (tokenizer, dictionary store, AI chunk
/// source) each get their own variant so callers can tell which stage of the
/// pipeline failed. None of them are retried inside this crate.
#[derive(Error, Debug)]
pub enum MonogatariError {
    /// I/O errors (dictionary files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Morphological tokenizer failure. Aborts the single analysis call.
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Dictionary store failure. Aborts the single lookup and propagates.
    #[error("Store error: {0}")]
    Store(String),

    /// Streaming session failure (AI source or transport disconnect).
    #[error("Stream error: {0}")]
    Stream(String),

    /// Analysis-related errors (invalid analyzer configuration, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MonogatariError.
pub type Result<T> = std::result::Result<T, MonogatariError>;

impl MonogatariError {
    /// Create a new tokenizer error.
    pub fn tokenizer<S: Into<String>>(msg: S) -> Self {
        MonogatariError::Tokenizer(msg.into())
    }

    /// Create a new dictionary store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        MonogatariError::Store(msg.into())
    }

    /// Create a new stream error.
    pub fn stream<S: Into<String>>(msg: S) -> Self {
        MonogatariError::Stream(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MonogatariError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MonogatariError::tokenizer("Test tokenizer error");
        assert_eq!(error.to_string(), "Tokenizer error: Test tokenizer error");

        let error = MonogatariError::store("Test store error");
        assert_eq!(error.to_string(), "Store error: Test store error");

        let error = MonogatariError::stream("Test stream error");
        assert_eq!(error.to_string(), "Stream error: Test stream error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let monogatari_error = MonogatariError::from(io_error);

        match monogatari_error {
            MonogatariError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
