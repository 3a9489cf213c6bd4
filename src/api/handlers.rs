//! HTTP handlers for summarization

use super::models::*;
use crate::error::NoteSnapError;
use crate::intake::{FileIntake, Upload};
use crate::metrics::Metrics;
use crate::summary::Summarizer;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Shared state for the API handlers
#[derive(Clone)]
pub struct ApiState {
    pub summarizer: Arc<dyn Summarizer>,
    pub intake: Arc<FileIntake>,
    pub metrics: Arc<Metrics>,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn error_response(e: NoteSnapError) -> (StatusCode, Json<ApiError>) {
    let (status, code) = match &e {
        NoteSnapError::UnsupportedFile { .. } => (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_FILE"),
        NoteSnapError::UploadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
        NoteSnapError::InvalidConfig(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };
    (status, Json(ApiError::new(code, e.to_string())))
}

/// Run the summarizer off the async executor and record metrics
async fn run_summary(state: &ApiState, text: String, source: &'static str) -> ApiResult<SummarizeResponse> {
    let input_chars = text.chars().count();
    let summarizer = state.summarizer.clone();

    let summary = crate::time_operation!(
        state.metrics.summary_duration,
        source,
        tokio::task::spawn_blocking(move || summarizer.summarize_detailed(&text)).await
    )
    .map_err(|e| {
        error!("Summarization task failed: {}", e);
        error_response(NoteSnapError::Internal(e.to_string()))
    })?;

    let response = SummarizeResponse::new(summary, input_chars);
    state
        .metrics
        .record_summary(response.outcome, input_chars, response.output_chars);
    Ok(Json(response))
}

/// Summarize raw text
///
/// POST /api/v1/summarize
pub async fn summarize_text(
    State(state): State<ApiState>,
    Json(request): Json<SummarizeRequest>,
) -> ApiResult<SummarizeResponse> {
    let request_id = Uuid::new_v4();
    info!("Summarize request {}: {} bytes", request_id, request.text.len());

    let response = run_summary(&state, request.text, "text").await?;
    info!("Summarize request {} finished via {}", request_id, response.0.outcome.as_str());
    Ok(response)
}

/// Summarize an uploaded text file
///
/// POST /api/v1/summarize/file
pub async fn summarize_file(
    State(state): State<ApiState>,
    Json(upload): Json<Upload>,
) -> ApiResult<SummarizeResponse> {
    let request_id = Uuid::new_v4();
    info!("File summarize request {}: {}", request_id, upload.filename);

    let text = state.intake.accept(upload).map_err(|e| {
        warn!("Upload {} rejected: {}", request_id, e);
        let reason = match &e {
            NoteSnapError::UnsupportedFile { .. } => "unsupported_file",
            NoteSnapError::UploadTooLarge { .. } => "too_large",
            _ => "other",
        };
        state.metrics.record_rejected_upload(reason);
        error_response(e)
    })?;

    run_summary(&state, text, "file").await
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /metrics
pub async fn metrics(State(state): State<ApiState>) -> String {
    state.metrics.export_prometheus()
}
