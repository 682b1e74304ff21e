//! Observability: logging and metrics.
//!
//! Structured logging through `tracing` and Prometheus-compatible
//! metrics for page views, chapter fetches, contact submissions and open
//! deck streams.

pub mod logging;
pub mod metrics;

pub use logging::{LogFormat, init_logging};
pub use metrics::init_metrics;
