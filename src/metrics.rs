use axum::{routing::get, Router};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::verdict::Verdict;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "verdict_assessments_total",
            "Assessments produced, labelled by verdict."
        );
        describe_counter!(
            "verdict_adapter_fallbacks_total",
            "Collaborator failures replaced by neutral values."
        );
    });
}

/// No-op when no recorder is installed (tests, library use).
pub fn record_verdict(verdict: Verdict) {
    counter!("verdict_assessments_total", "verdict" => verdict.code()).increment(1);
}
