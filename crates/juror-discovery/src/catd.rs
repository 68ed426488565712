//! CATD: confidence-aware truth discovery on long-tail data (Li et al., 2014).
//!
//! A source's weight is the lower end of a chi-squared confidence interval
//! over its claim count, divided by its number of mismatches. Sources with
//! few claims get a wide interval and therefore a small weight.

use std::sync::Arc;

use statrs::distribution::{ChiSquared, ContinuousCDF};

use juror_core::config::{DiscoveryAlgorithm, DiscoveryConfig};
use juror_core::errors::{InputError, JurorResult};
use juror_core::models::InferenceOutcome;
use juror_core::traits::ITruthInference;
use juror_core::{Answer, AnswerCorpus};
use juror_observability::discovery_run_span;

use crate::convergence::WeightConvergence;
use crate::output::{DiscoveryOutcome, DiscoveryOutput};
use crate::vote::{claim_stats, Truths, Weights};
use crate::{ensure_not_empty, fixed_point};

const MISMATCH_OFFSET: f64 = 1e-9;

/// Normalized source weights `χ²(claims)⁻¹(significance / 2) / mismatches`.
pub fn source_weights(corpus: &AnswerCorpus, truths: &Truths, significance: f64) -> Weights {
    let raw: Vec<_> = claim_stats(corpus, truths)
        .into_iter()
        .map(|(participant, stats)| {
            let confidence = chi_squared_quantile(f64::from(stats.claims), significance / 2.0);
            (participant, confidence / (f64::from(stats.mismatches) + MISMATCH_OFFSET))
        })
        .collect();

    let total: f64 = raw.iter().map(|(_, w)| w).sum();
    if !(total > 0.0 && total.is_finite()) {
        // No usable interval; every source counts the same.
        let uniform = 1.0 / raw.len() as f64;
        return raw.into_iter().map(|(participant, _)| (participant, uniform)).collect();
    }
    raw.into_iter()
        .map(|(participant, w)| (participant, w / total))
        .collect()
}

/// Quantile of the chi-squared distribution with `df` degrees of freedom.
///
/// Returns 0 when `df` is not a valid parameter.
pub fn chi_squared_quantile(df: f64, p: f64) -> f64 {
    match ChiSquared::new(df) {
        Ok(dist) => dist.inverse_cdf(p),
        Err(_) => 0.0,
    }
}

/// CATD engine over a shared corpus.
pub struct CatdEngine {
    corpus: Arc<AnswerCorpus>,
    config: DiscoveryConfig,
}

impl CatdEngine {
    /// Create an engine, rejecting an empty corpus or a significance level
    /// outside (0, 1).
    pub fn new(corpus: Arc<AnswerCorpus>, config: DiscoveryConfig) -> JurorResult<Self> {
        ensure_not_empty(&corpus)?;
        let significance = config.catd_significance;
        if !(significance > 0.0 && significance < 1.0) {
            return Err(InputError::SignificanceOutOfRange {
                value: significance,
            }
            .into());
        }
        Ok(Self {
            corpus,
            config: DiscoveryConfig {
                algorithm: DiscoveryAlgorithm::Catd,
                ..config
            },
        })
    }

    /// Engine with default settings over `answers`.
    pub fn from_answers(answers: impl IntoIterator<Item = Answer>) -> JurorResult<Self> {
        Self::new(Arc::new(AnswerCorpus::new(answers)), DiscoveryConfig::default())
    }

    pub fn significance(&self) -> f64 {
        self.config.catd_significance
    }

    /// Run to convergence, returning the stopping iteration's truths and weights.
    pub fn run(&self) -> DiscoveryOutcome {
        let corpus = self.corpus.as_ref();
        let span = discovery_run_span!(
            self.name(),
            corpus.question_count(),
            corpus.participant_count()
        );
        let _guard = span.enter();

        let significance = self.significance();
        let run = fixed_point::iterate(
            corpus,
            WeightConvergence::from_config(&self.config),
            |truths| source_weights(corpus, truths, significance),
        );
        tracing::info!(
            iterations = run.iterations,
            stop_reason = ?run.stop_reason,
            significance,
            "catd run finished"
        );

        let output = DiscoveryOutput::from_truths(corpus, &run.truths, run.weights);
        DiscoveryOutcome::new(output, run.iterations, run.stop_reason)
    }
}

impl ITruthInference for CatdEngine {
    fn name(&self) -> &'static str {
        "catd"
    }

    fn corpus(&self) -> &AnswerCorpus {
        &self.corpus
    }

    fn infer(&self) -> InferenceOutcome {
        self.run().into_inference()
    }
}
