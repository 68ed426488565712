use serde::{Deserialize, Serialize};

use super::defaults;

/// Which member of the Dawid–Skene family to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmVariant {
    /// Switches to hard classification once priors stabilize.
    #[default]
    Hybrid,
    /// Plain EM, never switches.
    Classic,
}

/// EM engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmConfig {
    pub variant: EmVariant,
    /// Prior delta below which the hybrid variant switches to fast mode.
    pub switch_threshold: f64,
    /// Delta below which two successive outputs count as converged.
    pub convergence_threshold: f64,
    /// The run stops once the iteration count exceeds this.
    pub max_iterations: usize,
}

impl EmConfig {
    /// Hybrid configuration with the given switch threshold.
    pub fn hybrid(switch_threshold: f64) -> Self {
        Self {
            variant: EmVariant::Hybrid,
            switch_threshold,
            ..Self::default()
        }
    }

    /// Classic configuration.
    pub fn classic() -> Self {
        Self {
            variant: EmVariant::Classic,
            ..Self::default()
        }
    }

    /// Threshold the controller compares the prior delta against, if it may switch.
    pub fn effective_switch_threshold(&self) -> Option<f64> {
        match self.variant {
            EmVariant::Hybrid => Some(self.switch_threshold),
            EmVariant::Classic => None,
        }
    }
}

impl Default for EmConfig {
    fn default() -> Self {
        Self {
            variant: EmVariant::default(),
            switch_threshold: defaults::DEFAULT_SWITCH_THRESHOLD,
            convergence_threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
        }
    }
}
