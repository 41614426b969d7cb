//! Telemetry metric name constants.
//!
//! Centralised metric names for claimcheck operations. The daemon (or an
//! embedding application) installs its own `metrics` recorder; without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `claimcheck_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `provider` — provider name (e.g. "huggingface")
//! - `status` — outcome of a model call: "ok" or the error category
//! - `outcome` — result of an analysis: the verdict or the error category

/// Total outbound model requests.
///
/// Labels: `provider`, `status` ("ok" | error category).
pub const MODEL_REQUESTS_TOTAL: &str = "claimcheck_model_requests_total";

/// Outbound model request duration in seconds.
///
/// Labels: `provider`.
pub const MODEL_REQUEST_DURATION_SECONDS: &str = "claimcheck_model_request_duration_seconds";

/// Total claim analyses completed by the analyzer.
///
/// Labels: `outcome` ("likely_true" | "likely_false" | "uncertain" | error category).
pub const ANALYSES_TOTAL: &str = "claimcheck_analyses_total";
