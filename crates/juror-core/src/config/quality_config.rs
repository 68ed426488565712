use serde::{Deserialize, Serialize};

use super::defaults;
use crate::quality::QualityInfluenceKind;

/// Worker quality configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    pub influence: QualityInfluenceKind,
    /// Steepness of the exponential strategy.
    pub alpha: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            influence: QualityInfluenceKind::default(),
            alpha: defaults::DEFAULT_QUALITY_ALPHA,
        }
    }
}
