//! ZenCrowd: probabilistic truth inference with one reliability per worker
//! (Demartini et al., 2012).
//!
//! A worker with reliability `r` picks the true choice with probability `r`
//! and each of the other choices with probability `(1 - r) / (k - 1)`.

use std::collections::BTreeMap;
use std::sync::Arc;

use juror_core::config::{DiscoveryAlgorithm, DiscoveryConfig};
use juror_core::errors::JurorResult;
use juror_core::models::{ClassEstimates, InferenceOutcome};
use juror_core::traits::ITruthInference;
use juror_core::{Answer, AnswerCorpus, ChoiceId, ParticipantId};
use juror_observability::discovery_run_span;

use crate::convergence::WeightConvergence;
use crate::ensure_not_empty;
use crate::output::{DiscoveryOutcome, DiscoveryOutput};
use crate::vote::Weights;

/// Reliability every worker starts from.
pub const INITIAL_RELIABILITY: f64 = 0.5;

/// Posterior over every corpus choice for each question (E-step).
///
/// A question whose likelihoods all underflow gets a uniform posterior.
pub fn class_estimates(corpus: &AnswerCorpus, reliabilities: &Weights) -> ClassEstimates {
    let labels: Vec<&ChoiceId> = corpus.choices().collect();
    let spread = labels.len().saturating_sub(1).max(1) as f64;

    corpus
        .questions()
        .map(|question| {
            let mut posterior: BTreeMap<ChoiceId, f64> =
                labels.iter().map(|label| ((*label).clone(), 1.0)).collect();
            for (participant, counts) in corpus.tallies(question) {
                let r = reliabilities
                    .get(participant)
                    .copied()
                    .unwrap_or(INITIAL_RELIABILITY);
                for (claimed, n) in counts {
                    for (label, likelihood) in posterior.iter_mut() {
                        let factor = if label == claimed { r } else { (1.0 - r) / spread };
                        *likelihood *= factor.powi(*n as i32);
                    }
                }
            }

            let total: f64 = posterior.values().sum();
            let uniform = 1.0 / posterior.len() as f64;
            for p in posterior.values_mut() {
                *p = if total > 0.0 { *p / total } else { uniform };
            }
            (question.clone(), posterior)
        })
        .collect()
}

/// Mean posterior of the choices each worker claimed (M-step).
pub fn reliabilities(corpus: &AnswerCorpus, estimates: &ClassEstimates) -> Weights {
    let mut sums: BTreeMap<&ParticipantId, (f64, u32)> = corpus
        .participants()
        .map(|participant| (participant, (0.0, 0)))
        .collect();

    for question in corpus.questions() {
        let posterior = estimates.get(question);
        for (participant, counts) in corpus.tallies(question) {
            let (sum, claims) = sums.entry(participant).or_insert((0.0, 0));
            for (claimed, n) in counts {
                let p = posterior.and_then(|d| d.get(claimed)).copied().unwrap_or(0.0);
                *sum += p * f64::from(*n);
                *claims += n;
            }
        }
    }

    sums.into_iter()
        .map(|(participant, (sum, claims))| {
            let reliability = match claims {
                0 => INITIAL_RELIABILITY,
                n => sum / f64::from(n),
            };
            (participant.clone(), reliability)
        })
        .collect()
}

/// ZenCrowd engine over a shared corpus.
pub struct ZenCrowdEngine {
    corpus: Arc<AnswerCorpus>,
    config: DiscoveryConfig,
}

impl ZenCrowdEngine {
    pub fn new(corpus: Arc<AnswerCorpus>, config: DiscoveryConfig) -> JurorResult<Self> {
        ensure_not_empty(&corpus)?;
        Ok(Self {
            corpus,
            config: DiscoveryConfig {
                algorithm: DiscoveryAlgorithm::ZenCrowd,
                ..config
            },
        })
    }

    /// Engine with default settings over `answers`.
    pub fn from_answers(answers: impl IntoIterator<Item = Answer>) -> JurorResult<Self> {
        Self::new(Arc::new(AnswerCorpus::new(answers)), DiscoveryConfig::default())
    }

    /// Run to convergence and return the last accepted iteration.
    pub fn run(&self) -> DiscoveryOutcome {
        let corpus = self.corpus.as_ref();
        let span = discovery_run_span!(
            self.name(),
            corpus.question_count(),
            corpus.participant_count()
        );
        let _guard = span.enter();

        let controller = WeightConvergence::from_config(&self.config);
        let mut reliability: Weights = corpus
            .participants()
            .map(|participant| (participant.clone(), INITIAL_RELIABILITY))
            .collect();
        let mut accepted: Option<DiscoveryOutput> = None;
        let mut iteration = 0;

        let (output, stop_reason) = loop {
            iteration += 1;
            let estimates = class_estimates(corpus, &reliability);
            reliability = reliabilities(corpus, &estimates);
            let current = DiscoveryOutput::new(estimates, reliability.clone());

            let previous = accepted.as_ref().map(DiscoveryOutput::weights);
            match controller.observe(iteration, previous, current.weights()) {
                None => accepted = Some(current),
                Some(reason) => break (accepted.unwrap_or(current), reason),
            }
        };

        tracing::info!(
            iterations = iteration,
            stop_reason = ?stop_reason,
            "zencrowd run finished"
        );
        DiscoveryOutcome::new(output, iteration, stop_reason)
    }
}

impl ITruthInference for ZenCrowdEngine {
    fn name(&self) -> &'static str {
        "zencrowd"
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
    use juror_core::QuestionId;

    #[test]
    fn initial_posterior_follows_the_vote() {
        let corpus = AnswerCorpus::new(vec![
            Answer::single("p1", "q1", "A"),
            Answer::single("p2", "q1", "A"),
            Answer::single("p3", "q1", "B"),
            Answer::single("p4", "q2", "C"),
        ]);
        let initial: Weights = corpus
            .participants()
            .map(|p| (p.clone(), INITIAL_RELIABILITY))
            .collect();
        let posterior = &class_estimates(&corpus, &initial)[&QuestionId::from("q1")];

        // A match weighs 0.5 and a miss 0.25 when every worker starts at 0.5.
        let total: f64 = posterior.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((posterior[&ChoiceId::from("A")] - 0.0625 / 0.109_375).abs() < 1e-12);
        assert!(posterior[&ChoiceId::from("B")] > posterior[&ChoiceId::from("C")]);
    }

    #[test]
    fn single_choice_corpus_is_certain() {
        let corpus = AnswerCorpus::new(vec![
            Answer::single("p1", "q1", "A"),
            Answer::single("p2", "q1", "A"),
        ]);
        let estimates = class_estimates(&corpus, &Weights::new());
        assert_eq!(estimates[&QuestionId::from("q1")][&ChoiceId::from("A")], 1.0);

        let reliability = reliabilities(&corpus, &estimates);
        assert!(reliability.values().all(|r| *r == 1.0));
    }
}
