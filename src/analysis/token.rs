//! Token types for Japanese text analysis.
//!
//! This module defines the core data structures that flow through the
//! analysis pipeline:
//!
//! - [`MorphToken`] - Raw morphological tokenizer output (surface + feature)
//! - [`MorphFeature`] - The feature bundle attached to a morphological token
//! - [`AnalyzedToken`] - A client-ready token, either a word annotated with
//!   dictionary ids and furigana or a non-word passthrough
//!
//! # Word classification
//!
//! A morphological token is a *word* iff it carries a part-of-speech tag and
//! that tag is not one of the tokenizer's non-word tags (the generic symbol
//! tag 記号 and the sentence boundary marker BOS/EOS). Everything else,
//! punctuation and whitespace included, passes through as a non-word token
//! with just its surface text.
//!
//! # Wire shape
//!
//! Analyzed tokens serialize with an `isWord` discriminant:
//!
//! ```text
//! {"isWord": true, "original": "私", "basicForm": "私", "mecabPos": "名詞",
//!  "furigana": "私[わたし]", "dictIds": ["1000"]}
//! {"isWord": false, "original": "\n"}
//! ```

use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// POS tags that never form dictionary words: the tokenizer's generic
    /// symbol tag and its sentence boundary marker.
    static ref NON_WORD_POS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("記号");
        set.insert("BOS/EOS");
        set
    };
}

/// A raw token produced by the morphological tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphToken {
    /// The surface form as it appears in the source text.
    pub surface: String,

    /// The feature bundle attached by the tokenizer.
    pub feature: MorphFeature,
}

/// Feature bundle of a morphological token.
///
/// Every field is optional: unknown words come back from the tokenizer with
/// no base form or reading, and boundary markers carry no tag at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphFeature {
    /// Part-of-speech tag in the tokenizer's tag vocabulary.
    pub pos: Option<String>,

    /// Dictionary base form (基本形) of the surface.
    pub basic_form: Option<String>,

    /// Phonetic reading, usually in katakana.
    pub reading: Option<String>,
}

impl MorphToken {
    /// Create a new morphological token.
    pub fn new<S: Into<String>>(surface: S, feature: MorphFeature) -> Self {
        MorphToken {
            surface: surface.into(),
            feature,
        }
    }

    /// Classify this token, returning its POS tag iff it is a word token.
    ///
    /// Absent tags and non-word tags (記号, BOS/EOS) yield `None`.
    pub fn word_pos(&self) -> Option<&str> {
        let pos = self.feature.pos.as_deref()?;
        if NON_WORD_POS.contains(pos) {
            None
        } else {
            Some(pos)
        }
    }

    /// The key to look this token up under: the base form when the tokenizer
    /// provides one, otherwise the surface.
    pub fn lookup_key(&self) -> &str {
        self.feature.basic_form.as_deref().unwrap_or(&self.surface)
    }
}

/// A client-ready analyzed token.
///
/// Explicit two-variant union: word tokens carry their annotations, non-word
/// tokens only their surface text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzedToken {
    /// A dictionary-eligible word with its annotations.
    Word(WordToken),
    /// Punctuation, whitespace, or other non-word surface text.
    NonWord(NonWordToken),
}

/// A word token: eligible for dictionary lookup and furigana annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordToken {
    /// Discriminant on the wire; always `true`.
    pub is_word: bool,

    /// The surface form as it appears in the source text.
    pub original: String,

    /// Dictionary base form reported by the tokenizer (empty when absent).
    pub basic_form: String,

    /// Part-of-speech tag in the tokenizer's tag vocabulary.
    pub mecab_pos: String,

    /// Bracket-notation furigana; only present when the surface has kanji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furigana: Option<String>,

    /// Ids of the dictionary entries matched for this token, in lookup
    /// result order. Empty when the word has no dictionary hits.
    pub dict_ids: Vec<String>,
}

/// A non-word token: passed through for faithful text reconstruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonWordToken {
    /// Discriminant on the wire; always `false`.
    pub is_word: bool,

    /// The surface form as it appears in the source text.
    pub original: String,
}

impl AnalyzedToken {
    /// Create a word token.
    pub fn word<S: Into<String>>(
        original: S,
        basic_form: S,
        mecab_pos: S,
        furigana: Option<String>,
        dict_ids: Vec<String>,
    ) -> Self {
        AnalyzedToken::Word(WordToken {
            is_word: true,
            original: original.into(),
            basic_form: basic_form.into(),
            mecab_pos: mecab_pos.into(),
            furigana,
            dict_ids,
        })
    }

    /// Create a non-word token.
    pub fn non_word<S: Into<String>>(original: S) -> Self {
        AnalyzedToken::NonWord(NonWordToken {
            is_word: false,
            original: original.into(),
        })
    }

    /// The token's surface text, whichever variant it is.
    pub fn original(&self) -> &str {
        match self {
            AnalyzedToken::Word(w) => &w.original,
            AnalyzedToken::NonWord(n) => &n.original,
        }
    }

    /// Whether this is a word token.
    pub fn is_word(&self) -> bool {
        matches!(self, AnalyzedToken::Word(_))
    }
}
