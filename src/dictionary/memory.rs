//! In-memory dictionary store.
//!
//! Holds the flat relational rows directly and answers lookups with
//! entry-level membership semantics: an entry matches when the looked-up
//! spelling appears in any of its rows and the POS tag appears in any of its
//! rows, and then all of the entry's rows are returned. This mirrors how the
//! relational store answers the same queries, which keeps the aggregator's
//! behavior identical whichever store backs it.
//!
//! Used by the tests and the CLI; a production deployment would put a real
//! relational store behind the same trait.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use futures::future::BoxFuture;
use serde::Deserialize;

use crate::error::Result;

use super::store::DictionaryStore;
use super::{FlatRow, Sense};

/// An in-memory, row-oriented dictionary store.
#[derive(Clone, Debug, Default)]
pub struct MemoryDictionaryStore {
    rows: Vec<FlatRow>,
}

/// One structured entry in a JSONL dictionary file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryRecord {
    id: String,
    #[serde(default)]
    kana: Vec<String>,
    #[serde(default)]
    kanji: Vec<String>,
    #[serde(default)]
    mecab_pos: Vec<String>,
    #[serde(default)]
    sense: Vec<Sense>,
}

impl MemoryDictionaryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryDictionaryStore::default()
    }

    /// Load a store from a JSONL file of structured entries
    /// (`{"id": ..., "kana": [...], "kanji": [...], "mecabPos": [...],
    /// "sense": [{"pos": [...], "gloss": [...]}]}` per line).
    pub fn load_jsonl<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut store = MemoryDictionaryStore::new();
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: EntryRecord = serde_json::from_str(&line)?;
            store.add_entry(
                &record.id,
                &record.kana,
                &record.kanji,
                &record.mecab_pos,
                &record.sense,
            );
        }
        Ok(store)
    }

    /// Append one raw relational row.
    pub fn add_row(&mut self, row: FlatRow) {
        self.rows.push(row);
    }

    /// Add a structured entry, expanding it into the cartesian row set the
    /// relational model stores (one row per kana × kanji × sense × gloss ×
    /// pos × mecab-tag combination). Kana-only entries get a single empty
    /// kanji spelling, matching how the store represents them.
    pub fn add_entry(
        &mut self,
        id: &str,
        kana: &[String],
        kanji: &[String],
        mecab_pos: &[String],
        senses: &[Sense],
    ) {
        let empty = [String::new()];
        let kana: &[String] = if kana.is_empty() { &empty } else { kana };
        let kanji: &[String] = if kanji.is_empty() { &empty } else { kanji };
        let mecab_pos: &[String] = if mecab_pos.is_empty() { &empty } else { mecab_pos };

        for ka in kana {
            for kj in kanji {
                for (i, sense) in senses.iter().enumerate() {
                    let sense_id = (i + 1) as u32;
                    for gloss in &sense.gloss {
                        for pos in &sense.pos {
                            for mecab in mecab_pos {
                                self.rows.push(FlatRow {
                                    id: id.to_string(),
                                    kana: ka.clone(),
                                    kanji: kj.clone(),
                                    sense_id,
                                    gloss: gloss.clone(),
                                    pos: pos.clone(),
                                    mecab_pos: mecab.clone(),
                                });
                            }
                        }
                    }
                }
            }
        }
    }

    /// Number of rows held.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows of every entry that has a row satisfying `matches_spelling`
    /// and a row carrying `mecab_pos`, in insertion order.
    fn matching_rows<F>(&self, matches_spelling: F, mecab_pos: &str) -> Vec<FlatRow>
    where
        F: Fn(&FlatRow) -> bool,
    {
        let mut spelled: AHashSet<&str> = AHashSet::new();
        let mut tagged: AHashSet<&str> = AHashSet::new();
        for row in &self.rows {
            if matches_spelling(row) {
                spelled.insert(&row.id);
            }
            if row.mecab_pos == mecab_pos {
                tagged.insert(&row.id);
            }
        }

        self.rows
            .iter()
            .filter(|row| spelled.contains(row.id.as_str()) && tagged.contains(row.id.as_str()))
            .cloned()
            .collect()
    }
}

impl DictionaryStore for MemoryDictionaryStore {
    fn lookup_by_kana<'a>(
        &'a self,
        text: &'a str,
        mecab_pos: &'a str,
    ) -> BoxFuture<'a, Result<Vec<FlatRow>>> {
        Box::pin(async move { Ok(self.matching_rows(|row| row.kana == text, mecab_pos)) })
    }

    fn lookup_by_kanji<'a>(
        &'a self,
        text: &'a str,
        mecab_pos: &'a str,
    ) -> BoxFuture<'a, Result<Vec<FlatRow>>> {
        Box::pin(async move { Ok(self.matching_rows(|row| row.kanji == text, mecab_pos)) })
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
