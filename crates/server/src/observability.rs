use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::Category;
use tracing::error;

// Prometheus metrics (default registry)
pub static PERMITS_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "permit_tracker_permits_created_total",
        "Total permits created",
        &["category"]
    )
    .expect("register permits_created_total")
});

pub static PERMIT_LOOKUPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "permit_tracker_permit_lookups_total",
        "Total permit lookups by outcome",
        &["category", "outcome"]
    )
    .expect("register permit_lookups_total")
});

pub static STATUS_CHANGES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "permit_tracker_status_changes_total",
        "Total default status changes",
        &["category"]
    )
    .expect("register status_changes_total")
});

/// Label value for a category segment; unknown names collapse into one label.
pub fn category_label(name: &str) -> &'static str {
    name.parse::<Category>().map(Category::as_str).unwrap_or("unknown")
}

pub fn record_created(category: &str) {
    PERMITS_CREATED_TOTAL.with_label_values(&[category_label(category)]).inc();
}

pub fn record_lookup(category: &str, found: bool) {
    let outcome = if found { "found" } else { "missing" };
    PERMIT_LOOKUPS_TOTAL.with_label_values(&[category_label(category), outcome]).inc();
}

pub fn record_status_change(category: &str) {
    STATUS_CHANGES_TOTAL.with_label_values(&[category_label(category)]).inc();
}

/// Render the default registry in the Prometheus text format.
pub fn render() -> Response {
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buf) {
        error!(error = %e, "metrics encoding failed");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    ([(header::CONTENT_TYPE, encoder.format_type().to_string())], buf).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_categories_share_a_label() {
        assert_eq!(category_label("electrical"), "electrical");
        assert_eq!(category_label("plumbing"), "unknown");
        assert_eq!(category_label("x"), "unknown");
    }

    #[test]
    fn counters_increase() {
        let before = PERMITS_CREATED_TOTAL.with_label_values(&["structural"]).get();
        record_created("structural");
        assert!(PERMITS_CREATED_TOTAL.with_label_values(&["structural"]).get() > before);
    }
}
