//! HTTP API integration tests
//!
//! Requests are driven through the router with `tower::ServiceExt::oneshot`,
//! no listener required.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use notesnap::{
    api::{build_router, ApiError, ApiState, SummarizeResponse},
    config::IntakeConfig,
    intake::FileIntake,
    metrics::Metrics,
    summary::SummaryOutcome,
    ExtractiveSummarizer,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

const DOCUMENT: &str = "The community garden opened on a sunny morning last spring. \
Volunteers planted tomatoes along the fence and watered the garden beds daily. \
A local bakery donated bread for the opening picnic. \
By midsummer the garden tomatoes were ripe and every neighbor shared garden tomatoes. \
Children painted signs for each row of vegetables. \
The city now plans a second site.";

fn router_with(intake: IntakeConfig) -> (Router, Arc<Metrics>) {
    let metrics = Arc::new(Metrics::new().unwrap());
    let state = ApiState {
        summarizer: Arc::new(ExtractiveSummarizer::default()),
        intake: Arc::new(FileIntake::new(intake)),
        metrics: metrics.clone(),
    };
    (build_router(state), metrics)
}

fn router() -> Router {
    router_with(IntakeConfig::default()).0
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

#[tokio::test]
async fn test_health() {
    let response = router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_summarize_text() {
    let response = router()
        .oneshot(post_json("/api/v1/summarize", json!({ "text": DOCUMENT })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: SummarizeResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.outcome, SummaryOutcome::Extractive);
    assert_eq!(body.sentence_count, 6);
    assert!(body.output_chars <= 400);
    assert_eq!(body.input_chars, DOCUMENT.chars().count());
    assert!(body.summary.starts_with("The community garden opened"));
}

#[tokio::test]
async fn test_summarize_short_text_passthrough() {
    let response = router()
        .oneshot(post_json("/api/v1/summarize", json!({ "text": "Tiny note." })))
        .await
        .unwrap();

    let body: SummarizeResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.summary, "Tiny note.");
    assert_eq!(body.outcome, SummaryOutcome::Passthrough);
}

#[tokio::test]
async fn test_summarize_file() {
    let request = post_json(
        "/api/v1/summarize/file",
        json!({ "filename": "garden.txt", "content_type": "text/plain", "content": DOCUMENT }),
    );
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: SummarizeResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.outcome, SummaryOutcome::Extractive);
}

#[tokio::test]
async fn test_summarize_file_by_extension_only() {
    let request = post_json(
        "/api/v1/summarize/file",
        json!({ "filename": "README.MD", "content": DOCUMENT }),
    );
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rejects_non_text_file() {
    let (router, metrics) = router_with(IntakeConfig::default());
    let request = post_json(
        "/api/v1/summarize/file",
        json!({ "filename": "photo.png", "content_type": "image/png", "content": "binary" }),
    );
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.code, "UNSUPPORTED_FILE");
    assert!(metrics
        .export_prometheus()
        .contains("uploads_rejected_total{reason=\"unsupported_file\"} 1"));
}

#[tokio::test]
async fn test_rejects_oversized_file() {
    let (router, _) = router_with(IntakeConfig {
        max_upload_bytes: 32,
        ..IntakeConfig::default()
    });
    let request = post_json(
        "/api/v1/summarize/file",
        json!({ "filename": "notes.txt", "content": DOCUMENT }),
    );
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.code, "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_metrics_endpoint_counts_summaries() {
    let (router, _) = router_with(IntakeConfig::default());

    let response = router
        .clone()
        .oneshot(post_json("/api/v1/summarize", json!({ "text": DOCUMENT })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("summaries_total{path=\"extractive\"} 1"));
    assert!(text.contains("summary_duration_seconds_count{source=\"text\"} 1"));
}
