//! The streaming analysis pipeline.
//!
//! Couples the incremental [`StoryParser`] with the [`TextAnalyzer`]: as
//! soon as a translation's closing delimiter arrives, the buffered narrative
//! is analyzed and a [`StoryChunk`] is produced carrying only the dictionary
//! entries this session has not emitted before.
//!
//! The returned stream is pull-based and lazy: nothing is read from the
//! upstream source and no analysis runs until the consumer polls, which
//! gives backpressure for free and makes cancellation a matter of dropping
//! the stream. An in-flight paragraph interrupted that way is never emitted
//! partially.

use std::collections::VecDeque;

use futures::stream::{Stream, StreamExt, try_unfold};
use tracing::debug;

use crate::analysis::analyzer::TextAnalyzer;
use crate::dictionary::{DictionaryMap, delta};
use crate::error::Result;

use super::parser::StoryParser;
use super::{StoryChunk, StoryParagraph};

struct StreamState<'a, S> {
    analyzer: &'a TextAnalyzer,
    chunks: S,
    parser: StoryParser,
    pending: VecDeque<char>,
    global_dict: DictionaryMap,
}

/// Turn an upstream character-chunk stream into a stream of analyzed story
/// chunks.
///
/// One paragraph is emitted per completed (text, translation) pair, in
/// stream order. The global dictionary lives inside the stream state: each
/// emission carries the delta of entries not seen earlier in the session,
/// after which the paragraph's full dictionary is merged in. A source that
/// ends mid-pair silently drops the trailing fragment. Upstream errors and
/// analysis errors terminate the stream.
pub fn story_stream<'a, S>(
    analyzer: &'a TextAnalyzer,
    chunks: S,
) -> impl Stream<Item = Result<StoryChunk>> + Send + 'a
where
    S: Stream<Item = Result<String>> + Send + Unpin + 'a,
{
    let state = StreamState {
        analyzer,
        chunks,
        parser: StoryParser::new(),
        pending: VecDeque::new(),
        global_dict: DictionaryMap::new(),
    };

    try_unfold(state, |mut st| async move {
        loop {
            // Drain buffered characters first; a single upstream chunk can
            // complete more than one pair.
            while let Some(c) = st.pending.pop_front() {
                let Some((text, translation)) = st.parser.push(c) else {
                    continue;
                };

                let analysis = st.analyzer.analyze(&text).await?;
                let dict = delta(&st.global_dict, &analysis.dict);
                st.global_dict.extend(analysis.dict);
                debug!(
                    text_len = text.chars().count(),
                    new_entries = dict.len(),
                    global_entries = st.global_dict.len(),
                    "paragraph completed"
                );

                let chunk = StoryChunk {
                    paragraph: StoryParagraph {
                        text,
                        translation,
                        tokens: analysis.tokens,
                    },
                    dict,
                };
                return Ok(Some((chunk, st)));
            }

            match st.chunks.next().await {
                Some(Ok(chunk)) => st.pending.extend(chunk.chars()),
                Some(Err(e)) => return Err(e),
                // End of source: whatever sits in the parser buffers is an
                // incomplete trailing fragment and is dropped.
                None => return Ok(None),
            }
        }
    })
}
