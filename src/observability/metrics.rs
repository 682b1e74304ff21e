//! Metrics collection.
//!
//! Prometheus-compatible metrics with label cardinality protection and
//! typed helpers for recording measurements.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::ServerError;

/// Guard against installing the recorder twice.
static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Route labels recorded for page views.
///
/// Anything else, including every unmatched path, is bucketed as
/// `"__unknown__"`.
const KNOWN_ROUTES: [&str; 14] = [
    "/",
    "/dashboard",
    "/chapters",
    "/chapter/{chapter_id}",
    "/contact",
    "/resources",
    "/team",
    "/preview",
    "/prezi/",
    "/prezi/slides.json",
    "/prezi/stream",
    "/prezi/key",
    "/docs/{*file}",
    "/healthz",
];

/// Fetch outcomes recorded for chapter loads.
const KNOWN_FETCH_RESULTS: [&str; 6] = ["ok", "not_found", "status", "network", "io", "invalid_path"];

/// Sanitizes a route template for use as a metrics label.
#[must_use]
pub fn sanitize_route_label(route: &str) -> &str {
    if KNOWN_ROUTES.contains(&route) {
        route
    } else {
        "__unknown__"
    }
}

fn sanitize_fetch_label(result: &str) -> &str {
    if KNOWN_FETCH_RESULTS.contains(&result) {
        result
    } else {
        "__unknown__"
    }
}

/// Initializes the global metrics recorder.
///
/// With `Some(port)` a Prometheus scrape endpoint listens on
/// `127.0.0.1:<port>`. With `None` the recorder is installed without an
/// HTTP endpoint.
///
/// # Errors
///
/// Returns [`ServerError::Metrics`] if the recorder or listener cannot be
/// installed (e.g. port already in use).
pub fn init_metrics(port: Option<u16>) -> Result<(), ServerError> {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        tracing::debug!("metrics already initialized, skipping");
        return Ok(());
    }
    port.map_or_else(
        || PrometheusBuilder::new().install_recorder().map(|_| ()),
        |p| {
            PrometheusBuilder::new()
                .with_http_listener(([127, 0, 0, 1], p))
                .install()
        },
    )
    .map_err(|e| ServerError::Metrics(e.to_string()))?;

    describe_metrics();
    Ok(())
}

fn describe_metrics() {
    describe_counter!("aacbook_page_views_total", "Pages served, by route");
    describe_counter!(
        "aacbook_chapter_fetches_total",
        "Chapter markdown fetches, by result"
    );
    describe_histogram!(
        "aacbook_chapter_fetch_duration_ms",
        "Chapter markdown fetch duration in milliseconds"
    );
    describe_counter!(
        "aacbook_contact_submissions_total",
        "Contact form submissions, by outcome"
    );
    describe_gauge!(
        "aacbook_deck_streams_active",
        "Open slide-deck streams holding a key listener"
    );
}

/// Records a served page.
pub fn record_page_view(route: &str) {
    let label = sanitize_route_label(route);
    counter!("aacbook_page_views_total", "route" => label.to_owned()).increment(1);
}

/// Records the outcome of a chapter fetch (`"ok"` or an error kind).
pub fn record_fetch(result: &str) {
    let label = sanitize_fetch_label(result);
    counter!("aacbook_chapter_fetches_total", "result" => label.to_owned()).increment(1);
}

/// Records how long a chapter fetch took.
pub fn record_fetch_duration(duration: Duration) {
    histogram!("aacbook_chapter_fetch_duration_ms").record(duration.as_secs_f64() * 1000.0);
}

/// Records a contact submission.
pub fn record_contact_submission(accepted: bool) {
    let outcome = if accepted { "accepted" } else { "rejected" };
    counter!("aacbook_contact_submissions_total", "outcome" => outcome).increment(1);
}

/// Records a key listener registering on the bus.
pub fn record_listener_registered() {
    gauge!("aacbook_deck_streams_active").increment(1.0);
}

/// Records a key listener leaving the bus.
pub fn record_listener_unregistered() {
    gauge!("aacbook_deck_streams_active").decrement(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_pass_through() {
        for route in &KNOWN_ROUTES {
            assert_eq!(sanitize_route_label(route), *route);
        }
    }

    #[test]
    fn unknown_routes_are_bucketed() {
        assert_eq!(sanitize_route_label("/wp-admin"), "__unknown__");
        assert_eq!(sanitize_route_label("/chapter/01"), "__unknown__");
        assert_eq!(sanitize_route_label(&"x".repeat(10_000)), "__unknown__");
    }

    #[test]
    fn fetch_results_are_bounded() {
        assert_eq!(sanitize_fetch_label("ok"), "ok");
        assert_eq!(sanitize_fetch_label("network"), "network");
        assert_eq!(sanitize_fetch_label("teapot"), "__unknown__");
    }

    #[test]
    fn record_functions_do_not_panic_without_recorder() {
        record_page_view("/");
        record_page_view("/nope");
        record_fetch("ok");
        record_fetch("status");
        record_fetch_duration(Duration::from_millis(12));
        record_contact_submission(true);
        record_contact_submission(false);
        record_listener_registered();
        record_listener_unregistered();
    }
}
