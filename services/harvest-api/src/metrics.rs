//! Prometheus exporter and request counters.

use std::net::SocketAddr;

use anyhow::Context;
use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;

/// Install the global recorder and serve `/metrics` on its own listener.
///
/// Must run inside the Tokio runtime and before the report is ingested,
/// otherwise ingest counters are recorded into the no-op recorder.
pub fn install_exporter(addr: SocketAddr) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("Failed to install Prometheus exporter")?;

    info!(addr = %addr, "Prometheus exporter listening");
    Ok(())
}

/// Count one request against an endpoint label.
pub fn record_request(endpoint: &'static str) {
    counter!("harvest_api_requests_total", "endpoint" => endpoint).increment(1);
}

/// Count a `/unit` request whose id did not parse.
pub fn record_invalid_unit() {
    counter!("harvest_api_invalid_unit_total").increment(1);
}
