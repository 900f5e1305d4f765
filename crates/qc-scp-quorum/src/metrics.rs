//! # Quorum Metrics
//!
//! Prometheus metrics for quorum evaluation load.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! qc-scp-quorum = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `scp_quorum_evaluations_total` - Counter of top-level evaluations (by kind)
//! - `scp_quorum_closure_passes_total` - Counter of quorum closure passes
//! - `scp_quorum_decode_failures_total` - Counter of rejected quorum set documents
//! - `scp_quorum_set_updates_total` - Counter of local quorum set replacements
//! - `scp_quorum_closest_blocking_size` - Gauge of the last closest v-blocking set size

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_counter_vec, register_gauge, register_int_counter, CounterVec, Gauge, IntCounter,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Top-level evaluations, labeled by kind (slice, v_blocking, quorum, closest)
    pub static ref EVALUATIONS: CounterVec = register_counter_vec!(
        "scp_quorum_evaluations_total",
        "Total number of quorum evaluations",
        &["kind"]
    )
    .expect("Failed to create EVALUATIONS metric");

    /// Quorum closure passes
    pub static ref CLOSURE_PASSES: IntCounter = register_int_counter!(
        "scp_quorum_closure_passes_total",
        "Total number of quorum closure passes"
    )
    .expect("Failed to create CLOSURE_PASSES metric");

    /// Rejected quorum set documents
    pub static ref DECODE_FAILURES: IntCounter = register_int_counter!(
        "scp_quorum_decode_failures_total",
        "Total number of quorum set documents rejected by the decoder"
    )
    .expect("Failed to create DECODE_FAILURES metric");

    /// Local quorum set replacements
    pub static ref QUORUM_SET_UPDATES: IntCounter = register_int_counter!(
        "scp_quorum_set_updates_total",
        "Total number of local quorum set replacements"
    )
    .expect("Failed to create QUORUM_SET_UPDATES metric");

    /// Size of the last closest v-blocking set
    pub static ref CLOSEST_BLOCKING_SIZE: Gauge = register_gauge!(
        "scp_quorum_closest_blocking_size",
        "Size of the last computed closest v-blocking set"
    )
    .expect("Failed to create CLOSEST_BLOCKING_SIZE metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

/// Record a top-level evaluation
#[cfg(feature = "metrics")]
pub fn record_evaluation(kind: &str) {
    EVALUATIONS.with_label_values(&[kind]).inc();
}

/// Record closure passes of one quorum computation
#[cfg(feature = "metrics")]
pub fn record_closure_passes(passes: u64) {
    CLOSURE_PASSES.inc_by(passes);
}

/// Record a rejected quorum set document
#[cfg(feature = "metrics")]
pub fn record_decode_failure() {
    DECODE_FAILURES.inc();
}

/// Record a local quorum set replacement
#[cfg(feature = "metrics")]
pub fn record_quorum_set_update() {
    QUORUM_SET_UPDATES.inc();
}

/// Update closest v-blocking size gauge
#[cfg(feature = "metrics")]
pub fn set_closest_blocking_size(size: usize) {
    CLOSEST_BLOCKING_SIZE.set(size as f64);
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_evaluation(_kind: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_closure_passes(_passes: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_decode_failure() {}

#[cfg(not(feature = "metrics"))]
pub fn record_quorum_set_update() {}

#[cfg(not(feature = "metrics"))]
pub fn set_closest_blocking_size(_size: usize) {}
