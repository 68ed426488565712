/// Errors raised while loading a dataset for a batch run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset {key} not found")]
    NotFound { key: String },

    #[error("failed to load dataset {key}: {reason}")]
    LoadFailed { key: String, reason: String },
}
