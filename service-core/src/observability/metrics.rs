//! Prometheus metrics recorder shared by the services.
//!
//! Handlers and middleware record through the `metrics` macros; the recorder
//! installed here renders them in Prometheus text format.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static METRICS_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Install the global Prometheus recorder. Safe to call more than once; only
/// the first call installs. Returns whether a recorder is active.
pub fn init_metrics() -> bool {
    METRICS_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install Prometheus recorder");
                None
            }
        })
        .is_some()
}

/// Render all recorded metrics in Prometheus exposition format.
pub fn render_metrics() -> String {
    METRICS_HANDLE
        .get()
        .and_then(|handle| handle.as_ref())
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_counter_is_rendered() {
        assert!(init_metrics());
        assert!(init_metrics());

        metrics::counter!("service_core_test_total").increment(3);

        let output = render_metrics();
        assert!(output.contains("service_core_test_total 3"));
    }
}
