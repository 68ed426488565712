//! Span definitions per operation: EM runs, discovery runs, batch runs and dataset loads.

/// Create an EM run span.
#[macro_export]
macro_rules! em_run_span {
    ($algorithm:expr, $questions:expr, $participants:expr) => {
        tracing::info_span!(
            "juror.em.run",
            algorithm = %$algorithm,
            questions = $questions,
            participants = $participants
        )
    };
}

/// Create a truth-discovery run span (CRH, CATD, ZenCrowd).
#[macro_export]
macro_rules! discovery_run_span {
    ($algorithm:expr, $questions:expr, $participants:expr) => {
        tracing::info_span!(
            "juror.discovery.run",
            algorithm = %$algorithm,
            questions = $questions,
            participants = $participants
        )
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($requests:expr) => {
        tracing::info_span!("juror.batch.run", requests = $requests)
    };
}

/// Create a dataset load span.
#[macro_export]
macro_rules! dataset_load_span {
    ($key:expr) => {
        tracing::info_span!("juror.batch.load", dataset = %$key)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EM_RUN: &str = "juror.em.run";
    pub const DISCOVERY_RUN: &str = "juror.discovery.run";
    pub const BATCH_RUN: &str = "juror.batch.run";
    pub const DATASET_LOAD: &str = "juror.batch.load";
}
