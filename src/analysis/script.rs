//! Japanese script classification helpers.
//!
//! Small pure functions over Unicode block membership, used to route
//! dictionary lookups (kanji vs. kana spellings) and to decide whether a
//! token needs a furigana annotation at all.

/// Check whether a character is a kanji (CJK ideograph).
///
/// Covers the Unified Ideographs block, Extension A, and the compatibility
/// ideographs that still show up in dictionary spellings.
pub fn is_kanji(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
        '\u{F900}'..='\u{FAFF}'    // CJK Compatibility Ideographs
    )
}

/// Check whether the text contains at least one kanji character.
pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

/// Convert katakana letters to their hiragana equivalents.
///
/// One-to-one codepoint mapping over the katakana letter range (ァ..ヶ) and
/// the katakana iteration marks. Everything else passes through unchanged,
/// including hiragana, kanji, ASCII, and the prolonged sound mark ー.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}' => {
                // Katakana block sits 0x60 above hiragana.
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}
