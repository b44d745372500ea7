//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `wordvec_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).

/// Total `GetVector` calls issued by the client.
///
/// Labels: `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "wordvec_requests_total";

/// `GetVector` round-trip duration in seconds.
pub const REQUEST_DURATION_SECONDS: &str = "wordvec_request_duration_seconds";

/// Replies carrying the not-found sentinel.
pub const LOOKUP_MISSES_TOTAL: &str = "wordvec_lookup_misses_total";
