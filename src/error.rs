//! Error types for the summarization service

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, NoteSnapError>;

/// Errors surfaced by configuration, intake and the HTTP layer
#[derive(Debug, Error)]
pub enum NoteSnapError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {filename}. Only text files can be summarized")]
    UnsupportedFile { filename: String },

    #[error("Upload too large: {size} bytes, {max} bytes allowed")]
    UploadTooLarge { size: usize, max: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Faults raised inside the summarization pipeline.
///
/// These never reach callers of [`crate::summary::summarize`]; the entry point
/// converts them into the passthrough fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryError {
    #[error("Sentence {index} produced a non-finite score")]
    NonFiniteScore { index: usize },

    #[error("Pipeline panicked: {0}")]
    Panicked(String),

    #[error("Truncation failed: {0}")]
    Truncation(String),
}
