use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static METRICS_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Install the Prometheus recorder. Safe to call more than once, including
/// concurrently.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!("Failed to install Prometheus recorder: {}", e);
            None
        }
    });
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .and_then(Option::as_ref)
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count a create/update attempt by outcome (`ok`, `duplicate`, `status`, ...).
pub fn record_save(operation: &'static str, outcome: &'static str) {
    counter!("invoice_saves_total", "operation" => operation, "outcome" => outcome).increment(1);
}

pub fn record_list_load(outcome: &'static str) {
    counter!("invoice_list_loads_total", "outcome" => outcome).increment(1);
}
