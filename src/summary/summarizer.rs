//! Extractive summarization entry point
//!
//! Pipeline: split -> important words -> score -> select -> assemble.
//! Short documents and documents with few sentences skip the pipeline.
//! Any fault inside the pipeline degrades to the same passthrough rule, so
//! summarizing never fails.

use super::frequency::FrequencyAnalyzer;
use super::models::{char_len, Sentence, Summary, SummaryOutcome};
use super::scorer::SentenceScorer;
use super::selector::{join_sentences, truncate_passthrough, truncate_summary, SentenceSelector};
use super::splitter::split_sentences;
use crate::error::{NoteSnapError, Result, SummaryError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Summarization strategy
pub trait Summarizer: Send + Sync {
    /// Summarize `text`, reporting which path produced the result
    fn summarize_detailed(&self, text: &str) -> Summary;

    /// Summarize `text` into a display string
    fn summarize(&self, text: &str) -> String {
        self.summarize_detailed(text).text
    }
}

/// Tuning constants for extractive summarization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Documents shorter than this are returned unchanged
    #[serde(default = "default_min_document_chars")]
    pub min_document_chars: usize,

    /// Documents with at most this many sentences skip scoring
    #[serde(default = "default_few_sentence_limit")]
    pub few_sentence_limit: usize,

    /// Cap for unsummarized output, ellipsis included
    #[serde(default = "default_passthrough_max_chars")]
    pub passthrough_max_chars: usize,

    /// Cap for assembled summaries, ellipsis included
    #[serde(default = "default_max_summary_chars")]
    pub max_summary_chars: usize,

    #[serde(default = "default_important_word_count")]
    pub important_word_count: usize,

    /// Shorter tokens are ignored when counting frequencies
    #[serde(default = "default_min_word_chars")]
    pub min_word_chars: usize,

    #[serde(default = "default_ideal_min_words")]
    pub ideal_min_words: usize,

    #[serde(default = "default_ideal_max_words")]
    pub ideal_max_words: usize,

    /// Multiplier for the first and last sentence
    #[serde(default = "default_position_boost")]
    pub position_boost: f64,

    #[serde(default = "default_min_selected")]
    pub min_selected: usize,

    #[serde(default = "default_max_selected")]
    pub max_selected: usize,

    /// One selected sentence per this many document sentences, before clamping
    #[serde(default = "default_sentences_per_selected")]
    pub sentences_per_selected: usize,

    /// Returned when selection leaves nothing to show
    #[serde(default = "default_empty_summary_message")]
    pub empty_summary_message: String,
}

fn default_min_document_chars() -> usize { 100 }
fn default_few_sentence_limit() -> usize { 3 }
fn default_passthrough_max_chars() -> usize { 300 }
fn default_max_summary_chars() -> usize { 400 }
fn default_important_word_count() -> usize { 10 }
fn default_min_word_chars() -> usize { 2 }
fn default_ideal_min_words() -> usize { 10 }
fn default_ideal_max_words() -> usize { 30 }
fn default_position_boost() -> f64 { 1.5 }
fn default_min_selected() -> usize { 3 }
fn default_max_selected() -> usize { 5 }
fn default_sentences_per_selected() -> usize { 6 }
fn default_empty_summary_message() -> String { "Nothing could be summarized.".to_string() }

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_document_chars: default_min_document_chars(),
            few_sentence_limit: default_few_sentence_limit(),
            passthrough_max_chars: default_passthrough_max_chars(),
            max_summary_chars: default_max_summary_chars(),
            important_word_count: default_important_word_count(),
            min_word_chars: default_min_word_chars(),
            ideal_min_words: default_ideal_min_words(),
            ideal_max_words: default_ideal_max_words(),
            position_boost: default_position_boost(),
            min_selected: default_min_selected(),
            max_selected: default_max_selected(),
            sentences_per_selected: default_sentences_per_selected(),
            empty_summary_message: default_empty_summary_message(),
        }
    }
}

impl SummaryConfig {
    /// Validate that the constants are usable together
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(NoteSnapError::InvalidConfig(format!("summary.{}", msg)));

        if self.passthrough_max_chars <= 3 {
            return invalid("passthrough_max_chars must leave room for the ellipsis");
        }
        if self.max_summary_chars <= 3 {
            return invalid("max_summary_chars must leave room for the ellipsis");
        }
        if self.ideal_min_words == 0 || self.ideal_min_words > self.ideal_max_words {
            return invalid("ideal_min_words must be in 1..=ideal_max_words");
        }
        if !self.position_boost.is_finite() || self.position_boost < 0.0 {
            return invalid("position_boost must be a non-negative number");
        }
        if self.min_selected == 0 || self.min_selected > self.max_selected {
            return invalid("min_selected must be in 1..=max_selected");
        }
        if self.sentences_per_selected == 0 {
            return invalid("sentences_per_selected must be greater than zero");
        }

        Ok(())
    }
}

/// Term-frequency extractive summarizer
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    config: SummaryConfig,
    analyzer: FrequencyAnalyzer,
    scorer: SentenceScorer,
    selector: SentenceSelector,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::from_valid(SummaryConfig::default())
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer after validating `config`
    pub fn new(config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: SummaryConfig) -> Self {
        Self {
            analyzer: FrequencyAnalyzer::new(config.important_word_count, config.min_word_chars),
            scorer: SentenceScorer::new(config.ideal_min_words, config.ideal_max_words, config.position_boost),
            selector: SentenceSelector::new(config.min_selected, config.max_selected, config.sentences_per_selected),
            config,
        }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Document unchanged if within the passthrough cap, otherwise hard-truncated
    fn passthrough(&self, document: &str, sentence_count: usize) -> Summary {
        let text = truncate_passthrough(document, self.config.passthrough_max_chars);
        let outcome = if text.len() == document.len() {
            SummaryOutcome::Passthrough
        } else {
            SummaryOutcome::Truncated
        };
        Summary::verbatim(text, outcome, sentence_count)
    }

    /// Score, select and assemble; callers handle the error path
    fn extract(&self, document: &str, sentences: &[Sentence]) -> std::result::Result<Summary, SummaryError> {
        let important_words = self.analyzer.important_words(document);
        let scored = self.scorer.score_all(sentences, &important_words);
        let selected = self.selector.select(&scored)?;

        let selected_indices: Vec<usize> = selected.iter().map(|s| s.original_index).collect();
        debug!("Selected sentences {:?} of {}", selected_indices, sentences.len());

        let text = truncate_summary(join_sentences(&selected), self.config.max_summary_chars)?;
        // only a trailing piece can be blank and ties keep document order,
        // so with the default limits this branch is not reached
        if text.is_empty() {
            return Ok(Summary {
                text: self.config.empty_summary_message.clone(),
                outcome: SummaryOutcome::Empty,
                sentence_count: sentences.len(),
                selected_indices: Vec::new(),
            });
        }

        Ok(Summary {
            text,
            outcome: SummaryOutcome::Extractive,
            sentence_count: sentences.len(),
            selected_indices,
        })
    }

    /// Single fault boundary: an extraction error or panic becomes the passthrough result
    fn guarded<F>(&self, document: &str, sentence_count: usize, stage: F) -> Summary
    where
        F: FnOnce() -> std::result::Result<Summary, SummaryError>,
    {
        let result = panic::catch_unwind(AssertUnwindSafe(stage)).unwrap_or_else(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(SummaryError::Panicked(message))
        });

        match result {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summarization fault, returning passthrough: {}", e);
                Summary {
                    outcome: SummaryOutcome::Fallback,
                    ..self.passthrough(document, sentence_count)
                }
            }
        }
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize_detailed(&self, text: &str) -> Summary {
        if char_len(text) < self.config.min_document_chars {
            return Summary::verbatim(text.to_string(), SummaryOutcome::Passthrough, 0);
        }

        let sentences = split_sentences(text);
        debug!("Split document into {} sentences", sentences.len());

        if sentences.len() <= self.config.few_sentence_limit {
            return self.passthrough(text, sentences.len());
        }

        self.guarded(text, sentences.len(), || self.extract(text, &sentences))
    }
}

static DEFAULT_SUMMARIZER: Lazy<ExtractiveSummarizer> = Lazy::new(ExtractiveSummarizer::default);

/// Summarize `text` with the default configuration. Never fails.
pub fn summarize(text: &str) -> String {
    DEFAULT_SUMMARIZER.summarize(text)
}
