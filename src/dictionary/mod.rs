//! Dictionary types and relational-row aggregation.
//!
//! The dictionary store hands back flat relational rows, one row per
//! kana × kanji × sense × gloss × pos × mecab-tag combination. This module
//! folds those rows into deduplicated nested entries ([`DictionaryEntry`]
//! holding ordered [`Sense`] lists) and defines the store interface the
//! analyzer talks to.
//!
//! # Wire shape
//!
//! A [`DictionaryMap`] serializes as an object keyed by entry id:
//!
//! ```text
//! {"1000": {"kana": ["わたし"], "kanji": ["私"], "mecabPos": ["名詞"],
//!           "sense": [{"pos": ["pn"], "gloss": ["I", "me"]}]}}
//! ```

pub mod memory;
pub mod store;

pub use memory::MemoryDictionaryStore;
pub use store::DictionaryStore;

use std::collections::{BTreeMap, HashMap};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One relational row from a dictionary lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRow {
    /// Stable entry id in the dictionary store.
    pub id: String,
    /// One kana reading of the entry.
    pub kana: String,
    /// One kanji spelling of the entry (empty for kana-only words).
    pub kanji: String,
    /// Sense number within the entry.
    pub sense_id: u32,
    /// One gloss text of that sense.
    pub gloss: String,
    /// One part-of-speech tag of that sense (dictionary tag vocabulary).
    pub pos: String,
    /// One tokenizer POS tag the entry is indexed under.
    pub mecab_pos: String,
}

/// One sense of a dictionary entry: its tags and gloss texts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    /// Part-of-speech tags in the dictionary's own vocabulary.
    pub pos: Vec<String>,
    /// Gloss texts.
    pub gloss: Vec<String>,
}

/// A dictionary entry with its readings, spellings, and senses.
///
/// The inner vectors are duplicate-free and keep first-insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Kana readings.
    pub kana: Vec<String>,
    /// Kanji spellings (may contain the empty string for kana-only words).
    pub kanji: Vec<String>,
    /// Tokenizer POS tags the entry is indexed under.
    pub mecab_pos: Vec<String>,
    /// Senses ordered by sense number.
    pub sense: Vec<Sense>,
}

/// Mapping from entry id to entry. Grows monotonically within a session.
pub type DictionaryMap = HashMap<String, DictionaryEntry>;

/// Result of folding one lookup's rows: the matched ids in first-appearance
/// order plus the finalized entries.
#[derive(Clone, Debug, Default)]
pub struct Aggregation {
    /// Entry ids in the order they first appeared in the rows.
    pub ids: Vec<String>,
    /// Finalized entries keyed by id.
    pub entries: DictionaryMap,
}

/// Push a value unless the vector already holds it. The row sets involved
/// are tiny, so a linear scan beats hashing here.
fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[derive(Default)]
struct SenseAcc {
    pos: Vec<String>,
    gloss: Vec<String>,
}

#[derive(Default)]
struct EntryAcc {
    kana: Vec<String>,
    kanji: Vec<String>,
    mecab_pos: Vec<String>,
    senses: BTreeMap<u32, SenseAcc>,
}

/// Fold flat relational rows into deduplicated dictionary entries.
///
/// Single pass: each row inserts its kana/kanji/mecab values into the
/// entry's sets and its gloss/pos into the identified sense's sets, creating
/// accumulators on first sight. Rows sharing an `(id, sense_id)` pair always
/// fold into one [`Sense`]. Empty input yields an empty aggregation.
pub fn aggregate(rows: &[FlatRow]) -> Aggregation {
    let mut ids = Vec::new();
    let mut accs: AHashMap<&str, EntryAcc> = AHashMap::new();

    for row in rows {
        let acc = accs.entry(&row.id).or_insert_with(|| {
            ids.push(row.id.clone());
            EntryAcc::default()
        });
        push_unique(&mut acc.kana, &row.kana);
        push_unique(&mut acc.kanji, &row.kanji);
        push_unique(&mut acc.mecab_pos, &row.mecab_pos);

        let sense = acc.senses.entry(row.sense_id).or_default();
        push_unique(&mut sense.gloss, &row.gloss);
        push_unique(&mut sense.pos, &row.pos);
    }

    let entries = ids
        .iter()
        .map(|id| {
            let acc = accs.remove(id.as_str()).unwrap_or_default();
            let entry = DictionaryEntry {
                kana: acc.kana,
                kanji: acc.kanji,
                mecab_pos: acc.mecab_pos,
                sense: acc
                    .senses
                    .into_values()
                    .map(|s| Sense {
                        pos: s.pos,
                        gloss: s.gloss,
                    })
                    .collect(),
            };
            (id.clone(), entry)
        })
        .collect();

    Aggregation { ids, entries }
}

/// The sub-map of `dict` whose keys are not yet present in `global`.
///
/// Recomputed per paragraph during streaming so a session never re-sends an
/// entry the client already holds.
pub fn delta(global: &DictionaryMap, dict: &DictionaryMap) -> DictionaryMap {
    dict.iter()
        .filter(|(id, _)| !global.contains_key(*id))
        .map(|(id, entry)| (id.clone(), entry.clone()))
        .collect()
}
