//! Metrics collection for observability

use crate::summary::SummaryOutcome;
use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry,
    register_histogram_with_registry, CounterVec, Histogram, HistogramVec, Opts, Registry,
};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> = Lazy::new(|| {
    Arc::new(Metrics::new().expect("Failed to initialize metrics"))
});

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    pub summaries: CounterVec,
    pub summary_duration: HistogramVec,
    pub input_chars: Histogram,
    pub output_chars: Histogram,
    pub uploads_rejected: CounterVec,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        let summaries = register_counter_vec_with_registry!(
            Opts::new("summaries_total", "Total summaries produced, by path"),
            &["path"],
            registry
        )?;

        let summary_duration = register_histogram_vec_with_registry!(
            "summary_duration_seconds",
            "Summarization duration in seconds",
            &["source"],
            registry
        )?;

        let input_chars = register_histogram_with_registry!(
            "summary_input_chars",
            "Characters per summarized document",
            vec![100.0, 300.0, 1_000.0, 3_000.0, 10_000.0, 100_000.0, 1_000_000.0],
            registry
        )?;

        let output_chars = register_histogram_with_registry!(
            "summary_output_chars",
            "Characters per produced summary",
            vec![50.0, 100.0, 200.0, 300.0, 400.0],
            registry
        )?;

        let uploads_rejected = register_counter_vec_with_registry!(
            Opts::new("uploads_rejected_total", "Total rejected file uploads"),
            &["reason"],
            registry
        )?;

        Ok(Self {
            registry,
            summaries,
            summary_duration,
            input_chars,
            output_chars,
            uploads_rejected,
        })
    }

    /// Record a finished summary
    pub fn record_summary(&self, outcome: SummaryOutcome, input_chars: usize, output_chars: usize) {
        self.summaries.with_label_values(&[outcome.as_str()]).inc();
        self.input_chars.observe(input_chars as f64);
        self.output_chars.observe(output_chars as f64);
    }

    /// Record a rejected upload
    pub fn record_rejected_upload(&self, reason: &str) {
        self.uploads_rejected.with_label_values(&[reason]).inc();
    }

    /// Export metrics in Prometheus text format
    pub fn export_prometheus(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap_or_default();

        String::from_utf8(buffer).unwrap_or_default()
    }
}

/// Helper macro to time operations
#[macro_export]
macro_rules! time_operation {
    ($histogram:expr, $label:expr, $operation:expr) => {{
        let timer = $histogram.with_label_values(&[$label]).start_timer();
        let result = $operation;
        timer.observe_duration();
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_initialization() {
        let metrics = Metrics::new();
        assert!(metrics.is_ok());
    }

    #[test]
    fn test_record_summary_exported() {
        let metrics = Metrics::new().unwrap();
        metrics.record_summary(SummaryOutcome::Extractive, 1200, 350);
        metrics.record_summary(SummaryOutcome::Passthrough, 40, 40);

        let text = metrics.export_prometheus();
        assert!(text.contains("summaries_total{path=\"extractive\"} 1"));
        assert!(text.contains("summaries_total{path=\"passthrough\"} 1"));
    }

    #[test]
    fn test_time_operation_macro() {
        let metrics = Metrics::new().unwrap();
        let value = crate::time_operation!(metrics.summary_duration, "text", 21 * 2);
        assert_eq!(value, 42);
        assert!(metrics.export_prometheus().contains("summary_duration_seconds_count{source=\"text\"} 1"));
    }

    #[test]
    fn test_record_rejected_upload() {
        let metrics = Metrics::new().unwrap();
        metrics.record_rejected_upload("unsupported_file");
        assert!(metrics
            .export_prometheus()
            .contains("uploads_rejected_total{reason=\"unsupported_file\"} 1"));
    }
}
