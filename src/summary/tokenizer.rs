//! Word tokenization shared by frequency counting and sentence scoring

use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII word characters plus the Hangul syllable block
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_\x{AC00}-\x{D7A3}]+").expect("word pattern is valid")
});

/// Lower-case `fragment` and return its maximal runs of word characters
pub fn tokenize(fragment: &str) -> Vec<String> {
    let lowered = fragment.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of word tokens in `fragment`
pub fn word_count(fragment: &str) -> usize {
    WORD.find_iter(&fragment.to_lowercase()).count()
}
