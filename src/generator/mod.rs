//! Story generation collaborators.
//!
//! The AI backend itself is external; this module defines the chunk-source
//! interface the streaming pipeline consumes, a scripted replay source for
//! tests and the CLI, and the prompt the backend is asked to answer.

use futures::stream::{self, BoxStream, StreamExt};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

/// Trait for asynchronous sources of generated story text.
///
/// The sequence is unbounded, arrives in arbitrary-sized chunks, and is
/// cancelled by dropping the stream. A failing source terminates the
/// sequence with an error item.
pub trait TextSource: Send + Sync {
    /// The chunk sequence of one generation session.
    fn chunks(&self) -> BoxStream<'_, Result<String>>;

    /// Get the name of this source (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A source that replays a fixed chunk list.
///
/// Stands in for the AI backend when replaying pre-generated stories and in
/// tests that need exact chunk boundaries.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTextSource {
    chunks: Vec<String>,
}

impl ScriptedTextSource {
    /// Replay exactly the given chunks.
    pub fn new(chunks: Vec<String>) -> Self {
        ScriptedTextSource { chunks }
    }

    /// Split one text into chunks of `chunk_size` graphemes, mimicking how a
    /// generation backend trickles text out.
    pub fn from_text(text: &str, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        let graphemes: Vec<&str> = text.graphemes(true).collect();
        let chunks = graphemes
            .chunks(chunk_size)
            .map(|chunk| chunk.concat())
            .collect();
        ScriptedTextSource { chunks }
    }
}

impl TextSource for ScriptedTextSource {
    fn chunks(&self) -> BoxStream<'_, Result<String>> {
        stream::iter(self.chunks.iter().cloned().map(Ok)).boxed()
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Build the generation prompt for a story request.
///
/// Asks for simple N5-level text with an English translation in parentheses
/// after each paragraph and no inline furigana, so the raw stream fits the
/// parser's delimiter grammar.
pub fn story_prompt(user_prompt: &str) -> String {
    format!(
        "You are a Japanese writer who writes simple texts for N5 Japanese learners \
so they can practice reading. Create a text based on the student's request. After \
each paragraph, put down the English translation between (). The text should not \
have any formatting; just return the plain text. Also, don't add furigana to the \
text. Only respond with the story and the translation, nothing more.\n\
This is the student request:\n{user_prompt}\n"
    )
}
