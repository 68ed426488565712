/// Tolerance used when checking that a distribution sums to 1.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

/// Target prefix of every juror tracing event.
pub const LOG_TARGET_PREFIX: &str = "juror";
