//! Data models for extractive summarization

use serde::{Deserialize, Serialize};

/// A sentence cut from the source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Text exactly as it appears in the document, separating whitespace excluded
    pub text: String,
    /// 0-based position in the split result; the only ordering key for assembly
    pub original_index: usize,
    /// Relevance score, 0.0 until scored
    pub score: f64,
}

impl Sentence {
    pub fn new(text: impl Into<String>, original_index: usize) -> Self {
        Self {
            text: text.into(),
            original_index,
            score: 0.0,
        }
    }

    /// Copy of this sentence carrying the given score
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            text: self.text.clone(),
            original_index: self.original_index,
            score,
        }
    }

    /// True when the sentence has no content after trimming
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Which path produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Document returned unchanged
    Passthrough,
    /// Document hard-truncated to the passthrough cap
    Truncated,
    /// Sentences selected and assembled
    Extractive,
    /// Nothing survived selection; the empty-summary message was returned
    Empty,
    /// An internal fault was absorbed and the passthrough rule applied
    Fallback,
}

impl SummaryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryOutcome::Passthrough => "passthrough",
            SummaryOutcome::Truncated => "truncated",
            SummaryOutcome::Extractive => "extractive",
            SummaryOutcome::Empty => "empty",
            SummaryOutcome::Fallback => "fallback",
        }
    }
}

/// Summary text plus how it was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub outcome: SummaryOutcome,
    /// Sentences found in the document (0 when splitting was skipped)
    pub sentence_count: usize,
    /// Original indices of the sentences used, in document order
    pub selected_indices: Vec<usize>,
}

impl Summary {
    pub(crate) fn verbatim(text: String, outcome: SummaryOutcome, sentence_count: usize) -> Self {
        Self {
            text,
            outcome,
            sentence_count,
            selected_indices: Vec::new(),
        }
    }
}

/// Character count in Unicode scalar values
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Prefix of `text` holding at most `max_chars` characters
pub(crate) fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
