//! Japanese text analysis for Monogatari.
//!
//! This module provides the analysis pipeline: script classification,
//! furigana alignment, token classification, and the orchestrating text
//! analyzer that combines the tokenizer and dictionary store.

pub mod analyzer;
pub mod furigana;
pub mod script;
pub mod token;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
