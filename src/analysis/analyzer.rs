//! Text analyzer: the orchestrating component of the analysis pipeline.
//!
//! Given raw Japanese text, the analyzer tokenizes it, classifies each
//! morphological token, looks word tokens up in the dictionary store (routed
//! by script: kanji-bearing keys against kanji spellings, everything else
//! against kana readings), attaches furigana, and folds every lookup's rows
//! into one per-call dictionary.
//!
//! ```text
//! Raw Text → Tokenizer → classify ─┬─ word ──→ lookup → aggregate ─┐
//!                                  │              │                 ├─→ Analysis
//!                                  │          furigana ─────────────┤
//!                                  └─ non-word ─────────────────────┘
//! ```
//!
//! The tokenizer and store are explicitly passed handles, opened by the
//! caller and shared by reference; nothing here reaches for process-wide
//! state, which is what makes the analyzer trivial to drive with test
//! doubles.

use std::sync::Arc;

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dictionary::{Aggregation, DictionaryMap, DictionaryStore, aggregate};
use crate::error::Result;
use crate::tokenizer::MorphTokenizer;

use super::furigana;
use super::script::contains_kanji;
use super::token::AnalyzedToken;

/// The result of analyzing one text: the annotated token sequence plus the
/// union of all dictionary entries its words matched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Analysis {
    /// Annotated tokens in source order.
    pub tokens: Vec<AnalyzedToken>,
    /// All dictionary entries matched by this call's lookups.
    pub dict: DictionaryMap,
}

/// Analyzer that turns raw text into client-ready annotated tokens.
pub struct TextAnalyzer {
    tokenizer: Arc<dyn MorphTokenizer>,
    store: Arc<dyn DictionaryStore>,
}

impl TextAnalyzer {
    /// Create an analyzer from its two collaborators.
    pub fn new(tokenizer: Arc<dyn MorphTokenizer>, store: Arc<dyn DictionaryStore>) -> Self {
        TextAnalyzer { tokenizer, store }
    }

    /// Analyze the given text.
    ///
    /// Dictionary lookups for independent word tokens run concurrently; the
    /// output token sequence always preserves source order. A word with no
    /// dictionary hits stays a word token with an empty id list. Empty input
    /// yields an empty analysis, not an error.
    pub async fn analyze(&self, text: &str) -> Result<Analysis> {
        let morphs = self.tokenizer.tokenize(text)?;
        debug!(count = morphs.len(), "tokenized text");

        // One aligned slot per token: word tokens get their aggregated
        // lookup, non-word tokens a None.
        let lookups = morphs.iter().map(|morph| async move {
            let result: Result<Option<Aggregation>> = match morph.word_pos() {
                Some(pos) => Ok(Some(self.lookup(morph.lookup_key(), pos).await?)),
                None => Ok(None),
            };
            result
        });
        let results = try_join_all(lookups).await?;

        let mut dict = DictionaryMap::new();
        let mut tokens = Vec::with_capacity(morphs.len());

        for (morph, lookup) in morphs.iter().zip(results) {
            match (morph.word_pos(), lookup) {
                (Some(pos), Some(agg)) => {
                    dict.extend(agg.entries);

                    let furigana = morph
                        .feature
                        .reading
                        .as_deref()
                        .and_then(|reading| furigana::align(&morph.surface, reading));

                    tokens.push(AnalyzedToken::word(
                        morph.surface.clone(),
                        morph.feature.basic_form.clone().unwrap_or_default(),
                        pos.to_string(),
                        furigana,
                        agg.ids,
                    ));
                }
                _ => tokens.push(AnalyzedToken::non_word(&morph.surface)),
            }
        }

        Ok(Analysis { tokens, dict })
    }

    /// Look up one word and fold its rows, routed by script.
    async fn lookup(&self, key: &str, pos: &str) -> Result<Aggregation> {
        debug!(key, pos, "dictionary lookup");
        let rows = if contains_kanji(key) {
            self.store.lookup_by_kanji(key, pos).await?
        } else {
            self.store.lookup_by_kana(key, pos).await?
        };
        Ok(aggregate(&rows))
    }
}
