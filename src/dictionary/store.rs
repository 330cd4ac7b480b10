//! Dictionary store interface.
//!
//! The relational dictionary store is an external collaborator: the analyzer
//! only needs the two lookup operations below. Implementations return flat
//! rows; folding them into entries is the aggregator's job.

use futures::future::BoxFuture;

use crate::error::Result;

use super::FlatRow;

/// Trait for dictionary stores the analyzer can query.
///
/// Lookups are independent, side-effect-free reads, so the analyzer may
/// dispatch several of them concurrently. The futures are boxed to keep the
/// trait usable behind `Arc<dyn DictionaryStore>`.
///
/// Match semantics: an entry matches when it carries the looked-up spelling
/// under any of its rows AND carries the POS tag under any of its rows; all
/// rows of each matching entry are returned, in store insertion order.
pub trait DictionaryStore: Send + Sync {
    /// Look up entries by kana reading, filtered by tokenizer POS tag.
    fn lookup_by_kana<'a>(
        &'a self,
        text: &'a str,
        mecab_pos: &'a str,
    ) -> BoxFuture<'a, Result<Vec<FlatRow>>>;

    /// Look up entries by kanji spelling, filtered by tokenizer POS tag.
    fn lookup_by_kanji<'a>(
        &'a self,
        text: &'a str,
        mecab_pos: &'a str,
    ) -> BoxFuture<'a, Result<Vec<FlatRow>>>;

    /// Get the name of this store (for debugging and configuration).
    fn name(&self) -> &'static str;
}
