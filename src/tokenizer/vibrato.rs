//! Vibrato-backed morphological tokenizer.
//!
//! Wraps the pure-Rust Viterbi tokenizer with a MeCab-format system
//! dictionary and maps its feature CSV into [`MorphFeature`]. Feature
//! parsing assumes the IPADIC column layout (POS first, base form seventh,
//! reading eighth), which is what MeCab ships by default; `*` columns are
//! treated as absent.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use vibrato::{Dictionary, Tokenizer};

use crate::analysis::token::{MorphFeature, MorphToken};
use crate::error::{MonogatariError, Result};

use super::MorphTokenizer;

/// IPADIC feature column indexes.
const POS_FIELD: usize = 0;
const BASIC_FORM_FIELD: usize = 6;
const READING_FIELD: usize = 7;

pub struct VibratoTokenizer {
    inner: Tokenizer,
}

impl VibratoTokenizer {
    /// Load a tokenizer from a compiled system dictionary file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let dict = Dictionary::read(reader).map_err(|e| {
            MonogatariError::tokenizer(format!("Failed to load dictionary: {e}"))
        })?;

        Ok(Self {
            inner: Tokenizer::new(dict),
        })
    }
}

impl MorphTokenizer for VibratoTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<MorphToken>> {
        let mut worker = self.inner.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        let tokens = worker
            .token_iter()
            .map(|t| MorphToken::new(t.surface(), parse_feature(t.feature())))
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "vibrato"
    }
}

/// Parse an IPADIC-layout feature CSV into the fields the analyzer uses.
fn parse_feature(feature: &str) -> MorphFeature {
    let fields: Vec<&str> = feature.split(',').collect();
    let get = |index: usize| {
        fields
            .get(index)
            .copied()
            .filter(|f| !f.is_empty() && *f != "*")
            .map(str::to_string)
    };

    MorphFeature {
        pos: get(POS_FIELD),
        basic_form: get(BASIC_FORM_FIELD),
        reading: get(READING_FIELD),
    }
}
