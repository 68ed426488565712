use std::collections::HashMap;

use juror_core::errors::{DatasetError, JurorResult};
use juror_core::traits::{DatasetKey, IDatasetSource};
use juror_core::Answer;

/// Dataset source backed by answer sets already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    datasets: HashMap<DatasetKey, Vec<Answer>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `answers` under `key`, replacing any previous set.
    pub fn insert(&mut self, key: impl Into<DatasetKey>, answers: Vec<Answer>) {
        self.datasets.insert(key.into(), answers);
    }

    pub fn with(mut self, key: impl Into<DatasetKey>, answers: Vec<Answer>) -> Self {
        self.insert(key, answers);
        self
    }
}

impl IDatasetSource for InMemorySource {
    fn load(&self, key: &DatasetKey) -> JurorResult<Vec<Answer>> {
        self.datasets
            .get(key)
            .cloned()
            .ok_or_else(|| DatasetError::NotFound { key: key.to_string() }.into())
    }
}
