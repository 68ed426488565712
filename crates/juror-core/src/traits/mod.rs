mod dataset_source;
mod inference;

pub use dataset_source::{DatasetKey, IDatasetSource};
pub use inference::ITruthInference;
