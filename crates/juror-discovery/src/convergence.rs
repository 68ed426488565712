//! Stopping rule shared by the weighted-vote algorithms.

use juror_core::config::DiscoveryConfig;
use juror_core::models::StopReason;

use crate::vote::Weights;

/// Stops a run on the iteration cap or once participant weights settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightConvergence {
    threshold: f64,
    max_iterations: usize,
}

impl WeightConvergence {
    pub fn new(threshold: f64, max_iterations: usize) -> Self {
        Self {
            threshold,
            max_iterations,
        }
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self::new(config.convergence_threshold, config.max_iterations)
    }

    /// Why the run stops at `iteration`, or `None` to keep going.
    ///
    /// `previous` is `None` on the first iteration, which never converges.
    pub fn observe(
        &self,
        iteration: usize,
        previous: Option<&Weights>,
        current: &Weights,
    ) -> Option<StopReason> {
        if iteration > self.max_iterations {
            tracing::info!(iteration, "iteration cap exceeded");
            return Some(StopReason::MaxIterations);
        }
        let delta = weight_delta(previous?, current);
        tracing::debug!(iteration, delta, "weight delta against previous iteration");
        (delta < self.threshold).then_some(StopReason::Converged)
    }
}

/// Σ |w - w'| over the participants of both maps; a missing weight counts as 0.
pub fn weight_delta(previous: &Weights, current: &Weights) -> f64 {
    let missing = previous
        .iter()
        .filter(|(participant, _)| !current.contains_key(*participant))
        .map(|(_, w)| w.abs());
    current
        .iter()
        .map(|(participant, w)| (w - previous.get(participant).copied().unwrap_or(0.0)).abs())
        .chain(missing)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use juror_core::ParticipantId;

    fn weights(values: &[(&str, f64)]) -> Weights {
        values
            .iter()
            .map(|(p, w)| (ParticipantId::from(*p), *w))
            .collect()
    }

    #[test]
    fn first_iteration_never_converges() {
        let controller = WeightConvergence::new(1.0, 10);
        assert_eq!(controller.observe(1, None, &weights(&[("p1", 0.5)])), None);
    }

    #[test]
    fn cap_wins_over_convergence() {
        let controller = WeightConvergence::new(1.0, 2);
        let w = weights(&[("p1", 0.5)]);
        assert_eq!(controller.observe(2, Some(&w), &w), Some(StopReason::Converged));
        assert_eq!(controller.observe(3, Some(&w), &w), Some(StopReason::MaxIterations));
    }

    #[test]
    fn delta_covers_both_key_sets() {
        let a = weights(&[("p1", 0.5), ("p2", 0.25)]);
        let b = weights(&[("p1", 0.75), ("p3", 0.125)]);
        assert!((weight_delta(&a, &b) - (0.25 + 0.25 + 0.125)).abs() < 1e-12);
        assert_eq!(weight_delta(&a, &a), 0.0);
    }
}
