use serde::{Deserialize, Serialize};

use super::Output;

/// Classification mode of the EM controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmMode {
    /// Posteriors are kept as probability distributions.
    Soft,
    /// Posteriors are collapsed to one-hot vectors after every E-step.
    Fast,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Converged,
    MaxIterations,
}

/// Trace of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Iterations executed, including the one that triggered the stop.
    pub iterations: usize,
    pub stop_reason: StopReason,
    /// Iteration after which the controller entered fast mode.
    pub switched_at: Option<usize>,
    /// Log-likelihood of every executed iteration, in order. Empty for the
    /// weighted-vote algorithms, which have no likelihood to monitor.
    pub log_likelihoods: Vec<f64>,
}

/// Output of a run together with its trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceOutcome {
    pub output: Output,
    pub report: RunReport,
}
