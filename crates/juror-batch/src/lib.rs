//! # juror-batch
//!
//! Runs many independent EM engines concurrently, one per parameter
//! combination, on a bounded rayon pool. Datasets are loaded through an
//! [`IDatasetSource`] and memoized in a caller-owned [`DatasetCache`].
//!
//! [`IDatasetSource`]: juror_core::traits::IDatasetSource

pub mod cache;
pub mod request;
pub mod runner;
pub mod source;
pub mod sweep;

pub use cache::DatasetCache;
pub use request::{RunRequest, RunResult};
pub use runner::BatchRunner;
pub use source::InMemorySource;
pub use sweep::threshold_sweep;
