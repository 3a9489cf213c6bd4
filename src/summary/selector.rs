//! Sentence selection and summary assembly

use super::models::{char_len, char_prefix, Sentence};
use crate::error::SummaryError;

const ELLIPSIS: &str = "...";

/// Picks the top-scored sentences and restores document order
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    min_selected: usize,
    max_selected: usize,
    sentences_per_selected: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new(3, 5, 6)
    }
}

impl SentenceSelector {
    pub fn new(min_selected: usize, max_selected: usize, sentences_per_selected: usize) -> Self {
        Self {
            min_selected,
            max_selected,
            sentences_per_selected,
        }
    }

    /// clamp(ceil(sentence_count / sentences_per_selected), min, max)
    pub fn target_count(&self, sentence_count: usize) -> usize {
        sentence_count
            .div_ceil(self.sentences_per_selected.max(1))
            .max(self.min_selected)
            .min(self.max_selected)
    }

    /// Take the highest scores (ties keep document order), drop blanks, return in document order
    pub fn select(&self, scored: &[Sentence]) -> Result<Vec<Sentence>, SummaryError> {
        if let Some(bad) = scored.iter().find(|s| !s.score.is_finite()) {
            return Err(SummaryError::NonFiniteScore { index: bad.original_index });
        }

        let mut ranked: Vec<&Sentence> = scored.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut selected: Vec<Sentence> = ranked
            .into_iter()
            .take(self.target_count(scored.len()))
            .filter(|s| !s.is_blank())
            .cloned()
            .collect();

        selected.sort_by_key(|s| s.original_index);

        Ok(selected)
    }
}

/// Join trimmed sentence texts with single spaces
pub fn join_sentences(selected: &[Sentence]) -> String {
    selected
        .iter()
        .map(|s| s.text.trim())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cap a summary at `max_chars`, preferring to cut just after the last period.
///
/// Summaries within the cap are returned unchanged. Otherwise the text is cut
/// after the last `.` within the first `max_chars - 3` characters (or hard at
/// that offset when there is none) and `...` is appended.
pub fn truncate_summary(summary: String, max_chars: usize) -> Result<String, SummaryError> {
    if char_len(&summary) <= max_chars {
        return Ok(summary);
    }

    let keep = max_chars
        .checked_sub(ELLIPSIS.len())
        .ok_or_else(|| SummaryError::Truncation(format!("cap {} is shorter than the ellipsis", max_chars)))?;

    let prefix = char_prefix(&summary, keep);
    let cut = match prefix.rfind('.') {
        Some(period) => &prefix[..=period],
        None => prefix,
    };

    Ok(format!("{}{}", cut, ELLIPSIS))
}

/// Return the document as-is when it fits `max_chars`, otherwise a hard cut plus `...`
pub fn truncate_passthrough(document: &str, max_chars: usize) -> String {
    if char_len(document) <= max_chars {
        return document.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    format!("{}{}", char_prefix(document, keep), ELLIPSIS)
}
