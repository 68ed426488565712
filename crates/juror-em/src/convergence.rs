//! Switch and stop decisions of the hybrid controller.
//!
//! The controller starts in [`EmMode::Soft`]. Once the summed absolute change
//! of the class priors between two successive outputs drops below the switch
//! threshold it enters [`EmMode::Fast`], and every later E-step is followed by
//! a C-step. A run stops when the iteration count exceeds the cap, or when
//! either the prior delta or the error-rate delta falls below the convergence
//! threshold. The stop check runs before the switch check.

use std::collections::BTreeMap;

use juror_core::config::EmConfig;
use juror_core::models::{EmMode, Output, StopReason};

/// Outcome of observing one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Stop(StopReason),
}

#[derive(Debug, Clone)]
pub struct ConvergenceController {
    switch_threshold: Option<f64>,
    convergence_threshold: f64,
    max_iterations: usize,
    mode: EmMode,
    switched_at: Option<usize>,
}

impl ConvergenceController {
    pub fn new(config: &EmConfig) -> Self {
        Self {
            switch_threshold: config.effective_switch_threshold(),
            convergence_threshold: config.convergence_threshold,
            max_iterations: config.max_iterations,
            mode: EmMode::Soft,
            switched_at: None,
        }
    }

    pub fn mode(&self) -> EmMode {
        self.mode
    }

    /// Iteration after which the controller entered fast mode.
    pub fn switched_at(&self) -> Option<usize> {
        self.switched_at
    }

    /// Compare `current` against the last accepted output and decide.
    ///
    /// `previous` is `None` on the first iteration, which never converges.
    pub fn observe(
        &mut self,
        iteration: usize,
        previous: Option<&Output>,
        current: &Output,
    ) -> Decision {
        if iteration > self.max_iterations {
            tracing::info!(iteration, "iteration cap exceeded");
            return Decision::Stop(StopReason::MaxIterations);
        }
        let Some(previous) = previous else {
            return Decision::Continue;
        };

        let prior_delta = class_probability_delta(previous, current);
        let rate_delta = error_rate_delta(previous, current);
        tracing::debug!(iteration, prior_delta, rate_delta, "deltas against previous output");

        if prior_delta < self.convergence_threshold || rate_delta < self.convergence_threshold {
            return Decision::Stop(StopReason::Converged);
        }

        if self.mode == EmMode::Soft {
            if let Some(threshold) = self.switch_threshold {
                if prior_delta < threshold {
                    self.mode = EmMode::Fast;
                    self.switched_at = Some(iteration);
                    tracing::info!(
                        iteration,
                        prior_delta,
                        threshold,
                        "switched to fast classification"
                    );
                }
            }
        }
        Decision::Continue
    }
}

/// Σ_j |p_j - p'_j| over the priors of both outputs.
pub fn class_probability_delta(previous: &Output, current: &Output) -> f64 {
    summed_abs_delta(previous.class_probabilities(), current.class_probabilities())
}

/// Σ |π - π'| over the error rates of both outputs.
pub fn error_rate_delta(previous: &Output, current: &Output) -> f64 {
    summed_abs_delta(previous.error_rates(), current.error_rates())
}

/// Keys missing on one side count as 0 there.
fn summed_abs_delta<K: Ord>(a: &BTreeMap<K, f64>, b: &BTreeMap<K, f64>) -> f64 {
    let shared_and_left: f64 = a
        .iter()
        .map(|(key, x)| (x - b.get(key).copied().unwrap_or(0.0)).abs())
        .sum();
    let right_only: f64 = b
        .iter()
        .filter(|(key, _)| !a.contains_key(*key))
        .map(|(_, y)| y.abs())
        .sum();
    shared_and_left + right_only
}
