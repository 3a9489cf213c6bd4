//! Extractive summarization
//!
//! Selects a handful of the document's own sentences:
//! - sentences are scored by overlap with the document's most frequent words
//! - sentences far outside a 10-30 word band are penalized
//! - the first and last sentence get a positional boost
//!
//! The whole pipeline is a pure, synchronous function of its input.

pub mod frequency;
pub mod models;
pub mod scorer;
pub mod selector;
pub mod splitter;
pub mod summarizer;
pub mod tokenizer;

pub use frequency::{FrequencyAnalyzer, WordFrequencyMap};
pub use models::{Sentence, Summary, SummaryOutcome};
pub use scorer::SentenceScorer;
pub use selector::SentenceSelector;
pub use splitter::split_sentences;
pub use summarizer::{summarize, ExtractiveSummarizer, Summarizer, SummaryConfig};
pub use tokenizer::tokenize;
