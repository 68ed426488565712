//! Concurrent engine runs on a bounded rayon pool.

use std::sync::Arc;

use rayon::prelude::*;

use juror_core::config::BatchConfig;
use juror_core::errors::{ConfigError, JurorResult};
use juror_core::models::InferenceOutcome;
use juror_core::traits::IDatasetSource;
use juror_core::AnswerCorpus;
use juror_em::EmEngine;
use juror_observability::batch_span;

use crate::cache::DatasetCache;
use crate::request::{RunRequest, RunResult};

/// Runs independent EM engines in parallel.
///
/// Runs share nothing but the read-only corpora handed out by the cache, so
/// the pool size only bounds how many run at once.
pub struct BatchRunner {
    pool: rayon::ThreadPool,
}

impl BatchRunner {
    /// Create a runner with `worker_threads` workers, or rayon's default for 0.
    pub fn new(worker_threads: usize) -> JurorResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(worker_threads)
            .thread_name(|i| format!("juror-worker-{i}"))
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "batch.worker_threads".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    pub fn from_config(config: &BatchConfig) -> JurorResult<Self> {
        Self::new(config.worker_threads)
    }

    pub fn worker_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run every request, returning results in request order.
    ///
    /// A failing request (unknown dataset, invalid settings) yields an `Err`
    /// outcome for that request only.
    pub fn run(
        &self,
        requests: &[RunRequest],
        cache: &DatasetCache,
        source: &dyn IDatasetSource,
    ) -> Vec<RunResult> {
        let span = batch_span!(requests.len());
        let _guard = span.enter();

        let results: Vec<RunResult> = self.pool.install(|| {
            requests
                .par_iter()
                .map(|request| run_one(request, cache, source))
                .collect()
        });

        let failed = results.iter().filter(|r| !r.is_ok()).count();
        tracing::info!(requests = requests.len(), failed, "batch finished");
        results
    }
}

fn run_one(request: &RunRequest, cache: &DatasetCache, source: &dyn IDatasetSource) -> RunResult {
    let corpus = match cache.get_or_load(&request.dataset, source) {
        Ok(corpus) => corpus,
        Err(e) => {
            return RunResult {
                request: request.clone(),
                fingerprint: None,
                outcome: Err(e),
            }
        }
    };
    let fingerprint = corpus.fingerprint();
    let outcome = run_engine(request, corpus);
    if let Ok(outcome) = &outcome {
        tracing::debug!(
            dataset = %request.dataset,
            fingerprint = %fingerprint,
            switch_threshold = request.config.switch_threshold,
            iterations = outcome.report.iterations,
            "run finished"
        );
    }
    RunResult {
        request: request.clone(),
        fingerprint: Some(fingerprint),
        outcome,
    }
}

fn run_engine(request: &RunRequest, corpus: Arc<AnswerCorpus>) -> JurorResult<InferenceOutcome> {
    let engine = EmEngine::new(corpus, request.config.clone())?;
    Ok(engine.run_with_report())
}
