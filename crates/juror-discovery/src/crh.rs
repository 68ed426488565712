//! CRH: conflict resolution by truth discovery and source reliability
//! estimation (Li et al., 2014), with the 0-1 loss for categorical claims.

use std::sync::Arc;

use juror_core::config::{DiscoveryAlgorithm, DiscoveryConfig};
use juror_core::errors::JurorResult;
use juror_core::models::InferenceOutcome;
use juror_core::traits::ITruthInference;
use juror_core::{Answer, AnswerCorpus};
use juror_observability::discovery_run_span;

use crate::convergence::WeightConvergence;
use crate::output::{DiscoveryOutcome, DiscoveryOutput};
use crate::vote::{claim_stats, Truths, Weights};
use crate::{ensure_not_empty, fixed_point};

/// Loss of a participant with no mismatches, so the log stays finite.
const LOSS_FLOOR: f64 = 1e-8;
const LOG_OFFSET: f64 = 1e-7;

/// Source weights `-ln(loss / max_loss)`, where a participant's loss is its
/// number of claims disagreeing with `truths`.
pub fn source_weights(corpus: &AnswerCorpus, truths: &Truths) -> Weights {
    let losses: Vec<_> = claim_stats(corpus, truths)
        .into_iter()
        .map(|(participant, stats)| {
            let loss = match stats.mismatches {
                0 => LOSS_FLOOR,
                n => f64::from(n),
            };
            (participant, loss)
        })
        .collect();
    let max_loss = losses.iter().map(|(_, loss)| *loss).fold(LOSS_FLOOR, f64::max);

    losses
        .into_iter()
        .map(|(participant, loss)| (participant, -(loss / max_loss + LOG_OFFSET).ln() + LOG_OFFSET))
        .collect()
}

/// CRH engine over a shared corpus.
pub struct CrhEngine {
    corpus: Arc<AnswerCorpus>,
    config: DiscoveryConfig,
}

impl CrhEngine {
    pub fn new(corpus: Arc<AnswerCorpus>, config: DiscoveryConfig) -> JurorResult<Self> {
        ensure_not_empty(&corpus)?;
        Ok(Self {
            corpus,
            config: DiscoveryConfig {
                algorithm: DiscoveryAlgorithm::Crh,
                ..config
            },
        })
    }

    /// Engine with default settings over `answers`.
    pub fn from_answers(answers: impl IntoIterator<Item = Answer>) -> JurorResult<Self> {
        Self::new(Arc::new(AnswerCorpus::new(answers)), DiscoveryConfig::default())
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

        let run = fixed_point::iterate(
            corpus,
            WeightConvergence::from_config(&self.config),
            |truths| source_weights(corpus, truths),
        );
        tracing::info!(
            iterations = run.iterations,
            stop_reason = ?run.stop_reason,
            "crh run finished"
        );

        let output = DiscoveryOutput::from_truths(corpus, &run.truths, run.weights);
        DiscoveryOutcome::new(output, run.iterations, run.stop_reason)
    }
}

impl ITruthInference for CrhEngine {
    fn name(&self) -> &'static str {
        "crh"
    }

    fn corpus(&self) -> &AnswerCorpus {
        &self.corpus
    }

    fn infer(&self) -> InferenceOutcome {
        self.run().into_inference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juror_core::{ChoiceId, ParticipantId, QuestionId};

    #[test]
    fn worst_source_weighs_almost_nothing() {
        let corpus = AnswerCorpus::new(vec![
            Answer::single("good", "q1", "A"),
            Answer::single("good", "q2", "A"),
            Answer::single("bad", "q1", "B"),
            Answer::single("bad", "q2", "B"),
            Answer::single("half", "q1", "A"),
            Answer::single("half", "q2", "B"),
        ]);
        let truths = Truths::from([
            (QuestionId::from("q1"), ChoiceId::from("A")),
            (QuestionId::from("q2"), ChoiceId::from("A")),
        ]);
        let weights = source_weights(&corpus, &truths);

        let w = |p: &str| weights[&ParticipantId::from(p)];
        assert!(w("bad").abs() < 1e-6);
        assert!((w("half") - 2f64.ln()).abs() < 1e-6);
        assert!(w("good") > w("half"));
        assert!(w("good").is_finite());
    }
}
