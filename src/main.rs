//! NoteSnap server
//!
//! `notesnap` serves the HTTP API; `notesnap <file>` prints a summary of a
//! local text file and exits.

use anyhow::Context;
use notesnap::{
    api::{build_router, ApiState},
    config::{Config, LoggingConfig},
    intake::FileIntake,
    metrics::METRICS,
    ExtractiveSummarizer, Summarizer,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let summarizer = ExtractiveSummarizer::new(config.summary.clone())?;
    let intake = FileIntake::new(config.intake.clone());

    if let Some(path) = std::env::args().nth(1) {
        let text = intake
            .read_path(&path)
            .await
            .with_context(|| format!("Failed to read {}", path))?;
        println!("{}", summarizer.summarize(&text));
        return Ok(());
    }

    let state = ApiState {
        summarizer: Arc::new(summarizer),
        intake: Arc::new(intake),
        metrics: METRICS.clone(),
    };
    let router = build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("NoteSnap listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
