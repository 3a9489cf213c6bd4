//! HTTP API for summarization

pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::ApiState;
pub use models::{ApiError, HealthResponse, SummarizeRequest, SummarizeResponse};
pub use routes::build_router;
