//! Sentence relevance scoring
//!
//! score = overlap * length_factor, then * position_boost for the first and
//! last sentence of the document.
//!
//! - overlap: number of important words found as substrings of the
//!   lower-cased sentence
//! - length_factor: min(1, words / ideal_min) * min(1, ideal_max / words),
//!   0 for sentences without words

use super::models::Sentence;
use super::tokenizer::word_count;

/// Scores sentences against a document's important words
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    ideal_min_words: usize,
    ideal_max_words: usize,
    position_boost: f64,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::new(10, 30, 1.5)
    }
}

impl SentenceScorer {
    pub fn new(ideal_min_words: usize, ideal_max_words: usize, position_boost: f64) -> Self {
        Self {
            ideal_min_words,
            ideal_max_words,
            position_boost,
        }
    }

    /// Score one sentence; `all_sentences` supplies the document bounds for the position boost
    pub fn score(&self, sentence: &Sentence, important_words: &[String], all_sentences: &[Sentence]) -> f64 {
        if sentence.is_blank() {
            return 0.0;
        }

        let lowered = sentence.text.to_lowercase();
        let overlap = important_words
            .iter()
            .filter(|word| lowered.contains(word.as_str()))
            .count();

        let mut score = overlap as f64 * self.length_factor(word_count(&sentence.text));

        let last = all_sentences.len().saturating_sub(1);
        if sentence.original_index == 0 || sentence.original_index == last {
            score *= self.position_boost;
        }

        score
    }

    /// Penalty for sentences outside the ideal word band
    pub fn length_factor(&self, words: usize) -> f64 {
        if words == 0 {
            return 0.0;
        }

        let words = words as f64;
        let short = (words / self.ideal_min_words as f64).min(1.0);
        let long = (self.ideal_max_words as f64 / words).min(1.0);
        short * long
    }

    /// Score every sentence, returning scored copies in document order
    pub fn score_all(&self, sentences: &[Sentence], important_words: &[String]) -> Vec<Sentence> {
        sentences
            .iter()
            .map(|s| s.with_score(self.score(s, important_words, sentences)))
            .collect()
    }
}
