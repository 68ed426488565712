use serde::{Deserialize, Serialize};

use super::defaults;

/// Weighted-vote truth discovery algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryAlgorithm {
    /// Conflict resolution on heterogeneous data (Li et al., 2014).
    #[default]
    Crh,
    /// Confidence-aware truth discovery for long-tail sources (Li et al., 2014).
    Catd,
    /// Probabilistic worker reliability (Demartini et al., 2012).
    ZenCrowd,
}

/// Truth discovery configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub algorithm: DiscoveryAlgorithm,
    /// Summed participant weight delta below which a run has converged.
    pub convergence_threshold: f64,
    /// The run stops once the iteration count exceeds this.
    pub max_iterations: usize,
    /// Significance level of the chi-squared interval CATD weights sources by.
    pub catd_significance: f64,
}

impl DiscoveryConfig {
    pub fn with_algorithm(algorithm: DiscoveryAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            algorithm: DiscoveryAlgorithm::default(),
            convergence_threshold: defaults::DEFAULT_DISCOVERY_CONVERGENCE_THRESHOLD,
            max_iterations: defaults::DEFAULT_DISCOVERY_MAX_ITERATIONS,
            catd_significance: defaults::DEFAULT_CATD_SIGNIFICANCE,
        }
    }
}
