//! Morphological tokenizer interface.
//!
//! The tokenizer is an external collaborator: the analyzer only needs a
//! function from text to an ordered sequence of [`MorphToken`]s. The vibrato
//! backend below is the default implementation; tests substitute their own.

use crate::analysis::token::MorphToken;
use crate::error::Result;

/// Trait for morphological tokenizers that segment Japanese text.
pub trait MorphTokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of tokens.
    ///
    /// Fails with a tokenizer error on malformed input; the error is
    /// propagated to the caller, never retried.
    fn tokenize(&self, text: &str) -> Result<Vec<MorphToken>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod vibrato;

// Re-export for convenient access
pub use self::vibrato::VibratoTokenizer;
