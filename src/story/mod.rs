//! Story streaming: paragraph types and the transport envelope.
//!
//! An AI-generated story arrives as an unbounded character stream in which
//! each narrative paragraph is followed by its English translation in
//! parentheses. The [`parser`] splits that stream into (text, translation)
//! pairs and the [`stream`] pipeline analyzes each pair and emits it as a
//! [`StoryChunk`] the moment its closing delimiter is seen.

pub mod parser;
pub mod stream;

pub use parser::StoryParser;
pub use stream::story_stream;

use serde::{Deserialize, Serialize};

use crate::analysis::token::AnalyzedToken;
use crate::dictionary::DictionaryMap;

/// A completed story paragraph: narrative text, its translation, and the
/// analyzed token sequence. Created once per delimiter pair, immutable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoryParagraph {
    /// The narrative text, without newlines or delimiters.
    pub text: String,
    /// The parenthesized translation, without the parentheses.
    pub translation: String,
    /// Analyzed tokens of `text` in source order.
    pub tokens: Vec<AnalyzedToken>,
}

/// Per-paragraph emission toward the transport layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoryChunk {
    /// The completed paragraph.
    pub paragraph: StoryParagraph,
    /// Only the dictionary entries the consumer has not seen yet in this
    /// session (the delta against the running global dictionary).
    pub dict: DictionaryMap,
}

/// Terminal notice closing a streaming session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Terminal {
    /// `"done"` on success, `"error"` on failure.
    pub message: String,
    /// Failure details, present only for error terminals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One message on the wire: a story chunk or a terminal notice.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum StreamMessage {
    /// A completed, analyzed paragraph.
    Chunk(StoryChunk),
    /// End of session.
    Terminal(Terminal),
}

impl StreamMessage {
    /// The terminal message closing a successful session.
    pub fn done() -> Self {
        StreamMessage::Terminal(Terminal {
            message: "done".to_string(),
            error: None,
        })
    }

    /// The terminal message closing a failed session.
    pub fn error<S: Into<String>>(error: S) -> Self {
        StreamMessage::Terminal(Terminal {
            message: "error".to_string(),
            error: Some(error.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_wire_shape() {
        let json = serde_json::to_value(StreamMessage::done()).unwrap();
        assert_eq!(json, serde_json::json!({"message": "done"}));
    }

    #[test]
    fn test_error_wire_shape() {
        let json = serde_json::to_value(StreamMessage::error("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "error", "error": "boom"}));
    }

    #[test]
    fn test_chunk_wire_shape() {
        let chunk = StoryChunk {
            paragraph: StoryParagraph {
                text: "a".to_string(),
                translation: "b".to_string(),
                tokens: vec![AnalyzedToken::non_word("a")],
            },
            dict: DictionaryMap::new(),
        };
        let json = serde_json::to_value(StreamMessage::Chunk(chunk)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "paragraph": {
                    "text": "a",
                    "translation": "b",
                    "tokens": [{"isWord": false, "original": "a"}]
                },
                "dict": {}
            })
        );
    }
}
