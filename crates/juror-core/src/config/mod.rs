mod batch_config;
pub mod defaults;
mod discovery_config;
mod em_config;
mod observability_config;
mod quality_config;

pub use batch_config::BatchConfig;
pub use discovery_config::{DiscoveryAlgorithm, DiscoveryConfig};
pub use em_config::{EmConfig, EmVariant};
pub use observability_config::ObservabilityConfig;
pub use quality_config::QualityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, JurorResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JurorConfig {
    pub em: EmConfig,
    pub discovery: DiscoveryConfig,
    pub quality: QualityConfig,
    pub batch: BatchConfig,
    pub observability: ObservabilityConfig,
}

impl JurorConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(s: &str) -> JurorResult<Self> {
        let config: Self = toml::from_str(s).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> JurorResult<()> {
        if !(0.0..=1.0).contains(&self.em.switch_threshold) {
            return Err(invalid("em.switch_threshold", "must lie in [0, 1]"));
        }
        if !(self.em.convergence_threshold > 0.0) {
            return Err(invalid("em.convergence_threshold", "must be positive"));
        }
        if self.em.max_iterations == 0 {
            return Err(invalid("em.max_iterations", "must be at least 1"));
        }
        if !(self.discovery.convergence_threshold > 0.0) {
            return Err(invalid("discovery.convergence_threshold", "must be positive"));
        }
        if self.discovery.max_iterations == 0 {
            return Err(invalid("discovery.max_iterations", "must be at least 1"));
        }
        if !(self.discovery.catd_significance > 0.0 && self.discovery.catd_significance < 1.0) {
            return Err(invalid("discovery.catd_significance", "must lie in (0, 1)"));
        }
        if !(self.quality.alpha >= 0.0) {
            return Err(invalid("quality.alpha", "must be non-negative"));
        }
        if self.batch.cache_capacity == 0 {
            return Err(invalid("batch.cache_capacity", "must be at least 1"));
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                "must be one of trace, debug, info, warn, error",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::JurorError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
