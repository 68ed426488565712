use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch runner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Size of the worker pool. 0 lets rayon choose.
    pub worker_threads: usize,
    /// Maximum number of datasets kept in the dataset cache.
    pub cache_capacity: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            worker_threads: defaults::DEFAULT_WORKER_THREADS,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}
