//! Router configuration

use super::handlers::{self, ApiState};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Room for JSON framing and escaping around an upload's content
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    let body_limit = state.intake.config().max_upload_bytes.saturating_add(BODY_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route("/api/v1/summarize", post(handlers::summarize_text))
        .route("/api/v1/summarize/file", post(handlers::summarize_file))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
        .with_state(state)
}
