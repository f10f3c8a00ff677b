//! Observability infrastructure - Metrics

mod config;
mod metrics;

pub use config::{MetricsConfig, ObservabilityConfig};
pub use metrics::{
    create_metrics_router, init_metrics, record_http_request, record_refresh, PrometheusMetrics,
};

/// Sanitize URL path for metric labels (remove IDs, limit cardinality)
fn sanitize_path(path: &str) -> String {
    // Replace record IDs with placeholders
    let path = regex::Regex::new(r"exp-[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .unwrap()
        .replace_all(path, "{id}");

    // Truncate long paths
    if path.len() > 50 {
        path[..50].to_string()
    } else {
        path.to_string()
    }
}
