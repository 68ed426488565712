mod config_error;
mod dataset_error;
mod input_error;
mod quality_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use input_error::InputError;
pub use quality_error::QualityError;

/// Top-level error for every juror crate.
#[derive(Debug, thiserror::Error)]
pub enum JurorError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("quality error: {0}")]
    Quality(#[from] QualityError),

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type JurorResult<T> = Result<T, JurorError>;
