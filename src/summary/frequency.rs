//! Document-wide term frequency and important-word extraction

use super::tokenizer::tokenize;
use indexmap::IndexMap;
use tracing::debug;

/// Word -> occurrence count, iterated in first-seen order
pub type WordFrequencyMap = IndexMap<String, usize>;

/// Builds term frequencies and picks the most frequent words
#[derive(Debug, Clone)]
pub struct FrequencyAnalyzer {
    top_k: usize,
    min_word_chars: usize,
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self::new(10, 2)
    }
}

impl FrequencyAnalyzer {
    pub fn new(top_k: usize, min_word_chars: usize) -> Self {
        Self { top_k, min_word_chars }
    }

    /// Count qualifying tokens across the whole document
    pub fn word_frequencies(&self, document: &str) -> WordFrequencyMap {
        let mut frequencies = WordFrequencyMap::new();

        for word in tokenize(document) {
            if word.chars().count() < self.min_word_chars {
                continue;
            }
            *frequencies.entry(word).or_insert(0) += 1;
        }

        frequencies
    }

    /// Up to `top_k` words by descending count; equal counts keep first-seen order
    pub fn important_words(&self, document: &str) -> Vec<String> {
        let frequencies = self.word_frequencies(document);

        let mut entries: Vec<(String, usize)> = frequencies.into_iter().collect();
        // stable sort preserves insertion order among ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(self.top_k);

        let words: Vec<String> = entries.into_iter().map(|(word, _)| word).collect();
        debug!("Extracted {} important words", words.len());
        words
    }
}
