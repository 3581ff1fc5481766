//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): requests by outcome
//! - `relay_upstream_fetch_duration_seconds` (histogram): upstream latency
//!
//! Recording is a no-op until a recorder is installed, so handlers can
//! call these unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Outcome label for `relay_requests_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    UpstreamError,
    Preflight,
    MethodNotAllowed,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::UpstreamError => "upstream_error",
            Outcome::Preflight => "preflight",
            Outcome::MethodNotAllowed => "method_not_allowed",
        }
    }
}

/// Install the Prometheus recorder and its HTTP scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Count one handled relay request.
pub fn record_request(outcome: Outcome) {
    counter!("relay_requests_total", "outcome" => outcome.as_str()).increment(1);
}

/// Record how long an upstream fetch took.
pub fn record_fetch(start: Instant) {
    histogram!("relay_upstream_fetch_duration_seconds").record(start.elapsed().as_secs_f64());
}
