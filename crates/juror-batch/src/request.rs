use juror_core::config::EmConfig;
use juror_core::errors::JurorResult;
use juror_core::models::InferenceOutcome;
use juror_core::traits::DatasetKey;

/// One engine run: a dataset and the EM settings to run it with.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub dataset: DatasetKey,
    pub config: EmConfig,
}

impl RunRequest {
    pub fn new(dataset: impl Into<DatasetKey>, config: EmConfig) -> Self {
        Self {
            dataset: dataset.into(),
            config,
        }
    }
}

/// A request together with what its run produced.
#[derive(Debug)]
pub struct RunResult {
    pub request: RunRequest,
    /// Content hash of the corpus the run used; `None` if it never loaded.
    pub fingerprint: Option<String>,
    pub outcome: JurorResult<InferenceOutcome>,
}

impl RunResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}
