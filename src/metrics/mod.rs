//! Metrics collection for observability

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec, Encoder,
    HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> =
    Lazy::new(|| Arc::new(Metrics::new().expect("Failed to initialize metrics")));

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    /// Classifications by resulting category
    pub classifications: CounterVec,

    /// Enrichment calls by (operation, outcome); outcome is one of
    /// success, fallback, error, timeout
    pub enrichment_requests: CounterVec,

    /// Enrichment call duration by operation
    pub enrichment_duration: HistogramVec,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let classifications = register_counter_vec_with_registry!(
            Opts::new("mood_classifications_total", "Total mood classifications"),
            &["category"],
            registry
        )?;

        let enrichment_requests = register_counter_vec_with_registry!(
            Opts::new(
                "enrichment_requests_total",
                "Total enrichment provider calls"
            ),
            &["operation", "outcome"],
            registry
        )?;

        let enrichment_duration = register_histogram_vec_with_registry!(
            "enrichment_request_duration_seconds",
            "Enrichment provider call duration in seconds",
            &["operation"],
            registry
        )?;

        Ok(Self {
            registry,
            classifications,
            enrichment_requests,
            enrichment_duration,
        })
    }

    /// Record a classification outcome
    pub fn record_classification(&self, category: &str) {
        self.classifications.with_label_values(&[category]).inc();
    }

    /// Record an enrichment call outcome
    pub fn record_enrichment(&self, operation: &str, outcome: &str) {
        self.enrichment_requests
            .with_label_values(&[operation, outcome])
            .inc();
    }

    /// Render the registry in prometheus text exposition format
    pub fn gather(&self) -> String {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        if encoder.encode(&self.registry.gather(), &mut buffer).is_err() {
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
