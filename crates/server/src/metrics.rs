use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static DEALERSHIPS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "directory_dealerships_created_total",
        "Dealerships added since process start"
    )
    .expect("register dealerships_created_total")
});

pub static PLANS_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "directory_plans_created_total",
        "Plans added since process start, by category",
        &["kind"]
    )
    .expect("register plans_created_total")
});

pub static REJECTED_WRITES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "directory_rejected_writes_total",
        "Write requests rejected with a client error, by reason",
        &["reason"]
    )
    .expect("register rejected_writes_total")
});

pub static ZIP_FALLBACK_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "directory_zip_fallback_total",
        "Zip lookups that matched nothing and returned the full table"
    )
    .expect("register zip_fallback_total")
});

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
