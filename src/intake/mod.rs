//! File intake
//!
//! Decides whether an uploaded or local file is text-like and produces the
//! document string handed to the summarizer. All I/O lives here, outside the
//! synchronous summarization core.

pub mod classifier;
pub mod reader;

pub use classifier::{is_text_like, IntakeConfig};
pub use reader::{FileIntake, Upload};
