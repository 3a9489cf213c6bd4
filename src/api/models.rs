//! Request and response bodies for the HTTP API

use crate::summary::{Summary, SummaryOutcome};
use serde::{Deserialize, Serialize};

/// POST /api/v1/summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// Summary with basic size information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub outcome: SummaryOutcome,
    pub sentence_count: usize,
    pub input_chars: usize,
    pub output_chars: usize,
}

impl SummarizeResponse {
    pub fn new(summary: Summary, input_chars: usize) -> Self {
        let output_chars = summary.text.chars().count();
        Self {
            summary: summary.text,
            outcome: summary.outcome,
            sentence_count: summary.sentence_count,
            input_chars,
            output_chars,
        }
    }
}

/// GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error body for all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
