use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static PRODUCT_READS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("prisha_product_reads_total", "Total catalog read requests")
        .expect("register product_reads_total")
});

pub static PRODUCT_WRITES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "prisha_product_writes_total",
        "Total catalog create/update/delete requests"
    )
    .expect("register product_writes_total")
});

pub static INQUIRIES_RECEIVED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "prisha_inquiries_received_total",
        "Total inquiries submitted through the public forms"
    )
    .expect("register inquiries_received_total")
});

pub static SETTINGS_UPDATES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("prisha_settings_updates_total", "Total settings upsert requests")
        .expect("register settings_updates_total")
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
    (axum::http::StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
