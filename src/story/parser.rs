//! Incremental story parser.
//!
//! A single-pass state machine over one character at a time. Chunk
//! boundaries in the upstream source are invisible here: feeding
//! `"a(b)c(d)"` whole or split anywhere produces identical pairs.

/// Which buffer the next ordinary character lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Narrative,
    Translation,
}

/// Push-based parser separating narrative text from parenthesized
/// translations.
///
/// Lives for one streaming session; feed it characters in stream order and
/// it hands back a completed (text, translation) pair whenever a closing
/// delimiter is seen. Newlines are dropped in both modes. An incomplete
/// trailing pair at end of stream simply stays in the buffers and is never
/// surfaced.
#[derive(Debug)]
pub struct StoryParser {
    text: String,
    translation: String,
    mode: Mode,
}

impl StoryParser {
    /// Create a parser in narrative mode with empty buffers.
    pub fn new() -> Self {
        StoryParser {
            text: String::new(),
            translation: String::new(),
            mode: Mode::Narrative,
        }
    }

    /// Process one character; returns the completed pair when `c` closes a
    /// translation.
    pub fn push(&mut self, c: char) -> Option<(String, String)> {
        match (self.mode, c) {
            (_, '\n') => None,
            (Mode::Narrative, '(') => {
                self.mode = Mode::Translation;
                None
            }
            (Mode::Translation, ')') => {
                self.mode = Mode::Narrative;
                let text = std::mem::take(&mut self.text);
                let translation = std::mem::take(&mut self.translation);
                Some((text, translation))
            }
            (Mode::Narrative, c) => {
                self.text.push(c);
                None
            }
            (Mode::Translation, c) => {
                self.translation.push(c);
                None
            }
        }
    }
}

impl Default for StoryParser {
    fn default() -> Self {
        Self::new()
    }
}
