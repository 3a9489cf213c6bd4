//! Sentence segmentation
//!
//! A boundary is a run of whitespace that directly follows `.`, `!` or `?`.
//! The punctuation stays with the preceding sentence and the whitespace run is
//! dropped; every other character is kept.

use super::models::Sentence;
use once_cell::sync::Lazy;
use regex::Regex;

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Split text into sentences, numbering them in document order.
///
/// Pieces may be empty (e.g. after trailing punctuation and whitespace).
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in BOUNDARY.find_iter(text) {
        // terminal punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(Sentence::new(&text[start..end], sentences.len()));
        start = boundary.end();
    }

    sentences.push(Sentence::new(&text[start..], sentences.len()));
    sentences
}
