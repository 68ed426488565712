use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::errors::JurorResult;

/// Identity of a dataset (e.g. a semester or study cohort) within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetKey(pub String);

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DatasetKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DatasetKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Upstream provider of answer sets.
///
/// Loads may be expensive; the batch layer memoizes them per key.
pub trait IDatasetSource: Send + Sync {
    fn load(&self, key: &DatasetKey) -> JurorResult<Vec<Answer>>;
}
