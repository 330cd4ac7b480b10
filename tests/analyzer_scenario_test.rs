//! End-to-end analysis scenario with a scripted tokenizer and an in-memory
//! dictionary store.

use std::collections::HashMap;
use std::sync::Arc;

use monogatari::analysis::analyzer::TextAnalyzer;
use monogatari::analysis::token::{AnalyzedToken, MorphFeature, MorphToken};
use monogatari::dictionary::{MemoryDictionaryStore, Sense};
use monogatari::error::Result;
use monogatari::tokenizer::MorphTokenizer;
use serde_json::json;

/// Tokenizer double keyed by input text.
struct MapTokenizer {
    map: HashMap<String, Vec<MorphToken>>,
}

impl MorphTokenizer for MapTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<MorphToken>> {
        Ok(self.map.get(text).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "map"
    }
}

fn morph(surface: &str, pos: &str, basic: &str, reading: &str) -> MorphToken {
    MorphToken::new(
        surface,
        MorphFeature {
            pos: Some(pos.to_string()),
            basic_form: Some(basic.to_string()),
            reading: Some(reading.to_string()),
        },
    )
}

fn sense(pos: &[&str], gloss: &[&str]) -> Sense {
    Sense {
        pos: pos.iter().map(|s| s.to_string()).collect(),
        gloss: gloss.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The seven morphological tokens of 私の名前はジョンです\n.
fn sample_tokens() -> Vec<MorphToken> {
    vec![
        morph("私", "名詞", "私", "ワタシ"),
        morph("の", "助詞", "の", "ノ"),
        morph("名前", "名詞", "名前", "ナマエ"),
        morph("は", "助詞", "は", "ハ"),
        morph("ジョン", "名詞", "ジョン", "ジョン"),
        morph("です", "助動詞", "です", "デス"),
        MorphToken::new(
            "\n",
            MorphFeature {
                pos: Some("記号".to_string()),
                basic_form: None,
                reading: None,
            },
        ),
    ]
}

fn sample_store() -> MemoryDictionaryStore {
    let mut store = MemoryDictionaryStore::new();
    store.add_entry(
        "1000",
        &strings(&["わたし"]),
        &strings(&["私"]),
        &strings(&["名詞"]),
        &[sense(&["pn"], &["I", "me"])],
    );
    store.add_entry(
        "1002",
        &strings(&["なまえ"]),
        &strings(&["名前"]),
        &strings(&["名詞"]),
        &[sense(&["n"], &["name", "full name"])],
    );
    store.add_entry(
        "1003",
        &strings(&["は"]),
        &[],
        &strings(&["助詞"]),
        &[sense(
            &["prt"],
            &["topic marker particle", "indicates contrast with another option"],
        )],
    );
    store.add_entry(
        "1004",
        &strings(&["です"]),
        &[],
        &strings(&["助動詞"]),
        &[sense(&["cop"], &["be", "is"])],
    );
    store.add_entry(
        "1005",
        &strings(&["の"]),
        &[],
        &strings(&["助詞"]),
        &[sense(
            &["prt"],
            &["indicates possessive", "nominalizes verbs and adjectives"],
        )],
    );
    store
}

fn sample_analyzer() -> TextAnalyzer {
    let mut map = HashMap::new();
    map.insert("私の名前はジョンです\n".to_string(), sample_tokens());
    TextAnalyzer::new(
        Arc::new(MapTokenizer { map }),
        Arc::new(sample_store()),
    )
}

#[tokio::test]
async fn test_analyze_annotates_tokens_and_collects_dict() {
    let analyzer = sample_analyzer();
    let analysis = analyzer.analyze("私の名前はジョンです\n").await.unwrap();

    assert_eq!(analysis.tokens.len(), 7);

    // Six word tokens, one non-word newline.
    let words: Vec<_> = analysis.tokens.iter().filter(|t| t.is_word()).collect();
    assert_eq!(words.len(), 6);
    assert_eq!(analysis.tokens[6], AnalyzedToken::non_word("\n"));

    // Kanji-bearing words get furigana, kana-only ones none.
    match &analysis.tokens[0] {
        AnalyzedToken::Word(w) => {
            assert_eq!(w.furigana.as_deref(), Some("私[わたし]"));
            assert_eq!(w.dict_ids, vec!["1000"]);
        }
        other => panic!("expected word token, got {other:?}"),
    }
    match &analysis.tokens[2] {
        AnalyzedToken::Word(w) => {
            assert_eq!(w.furigana.as_deref(), Some("名[な] 前[まえ]"));
            assert_eq!(w.dict_ids, vec!["1002"]);
        }
        other => panic!("expected word token, got {other:?}"),
    }

    // ジョン has no dictionary match but stays a word token.
    match &analysis.tokens[4] {
        AnalyzedToken::Word(w) => {
            assert!(w.dict_ids.is_empty());
            assert_eq!(w.furigana, None);
        }
        other => panic!("expected word token, got {other:?}"),
    }

    // The per-call dictionary unions every lookup's entries.
    let mut ids: Vec<_> = analysis.dict.keys().cloned().collect();
    ids.sort();
    assert_eq!(ids, vec!["1000", "1002", "1003", "1004", "1005"]);
}

#[tokio::test]
async fn test_analyze_wire_shape() {
    let analyzer = sample_analyzer();
    let analysis = analyzer.analyze("私の名前はジョンです\n").await.unwrap();

    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(
        value,
        json!({
            "tokens": [
                {
                    "isWord": true,
                    "original": "私",
                    "mecabPos": "名詞",
                    "basicForm": "私",
                    "furigana": "私[わたし]",
                    "dictIds": ["1000"]
                },
                {
                    "isWord": true,
                    "original": "の",
                    "mecabPos": "助詞",
                    "basicForm": "の",
                    "dictIds": ["1005"]
                },
                {
                    "isWord": true,
                    "original": "名前",
                    "mecabPos": "名詞",
                    "basicForm": "名前",
                    "furigana": "名[な] 前[まえ]",
                    "dictIds": ["1002"]
                },
                {
                    "isWord": true,
                    "original": "は",
                    "mecabPos": "助詞",
                    "basicForm": "は",
                    "dictIds": ["1003"]
                },
                {
                    "isWord": true,
                    "original": "ジョン",
                    "mecabPos": "名詞",
                    "basicForm": "ジョン",
                    "dictIds": []
                },
                {
                    "isWord": true,
                    "original": "です",
                    "mecabPos": "助動詞",
                    "basicForm": "です",
                    "dictIds": ["1004"]
                },
                {
                    "isWord": false,
                    "original": "\n"
                }
            ],
            "dict": {
                "1000": {
                    "kana": ["わたし"],
                    "kanji": ["私"],
                    "mecabPos": ["名詞"],
                    "sense": [{"pos": ["pn"], "gloss": ["I", "me"]}]
                },
                "1002": {
                    "kana": ["なまえ"],
                    "kanji": ["名前"],
                    "mecabPos": ["名詞"],
                    "sense": [{"pos": ["n"], "gloss": ["name", "full name"]}]
                },
                "1003": {
                    "kana": ["は"],
                    "kanji": [""],
                    "mecabPos": ["助詞"],
                    "sense": [{"pos": ["prt"], "gloss": [
                        "topic marker particle",
                        "indicates contrast with another option"
                    ]}]
                },
                "1004": {
                    "kana": ["です"],
                    "kanji": [""],
                    "mecabPos": ["助動詞"],
                    "sense": [{"pos": ["cop"], "gloss": ["be", "is"]}]
                },
                "1005": {
                    "kana": ["の"],
                    "kanji": [""],
                    "mecabPos": ["助詞"],
                    "sense": [{"pos": ["prt"], "gloss": [
                        "indicates possessive",
                        "nominalizes verbs and adjectives"
                    ]}]
                }
            }
        })
    );
}

#[tokio::test]
async fn test_analyze_empty_text() {
    let analyzer = sample_analyzer();
    let analysis = analyzer.analyze("").await.unwrap();
    assert!(analysis.tokens.is_empty());
    assert!(analysis.dict.is_empty());
}
