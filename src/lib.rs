//! NoteSnap: extractive text summarization
//!
//! The core ([`summary`]) turns a document into a short summary made of the
//! document's own sentences. [`intake`] decides which files are text and reads
//! them, [`api`] exposes summarization over HTTP.
//!
//! ```
//! let text = "Short notes stay as they are.";
//! assert_eq!(notesnap::summarize(text), text);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod intake;
pub mod metrics;
pub mod summary;

pub use error::{NoteSnapError, Result, SummaryError};
pub use summary::{summarize, ExtractiveSummarizer, Summarizer, SummaryConfig};
