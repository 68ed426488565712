//! Result of a truth discovery run and its conversion to the engine-neutral [`Output`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use juror_core::models::{
    ClassEstimates, ClassProbabilities, ErrorRates, InferenceOutcome, Output, RunReport,
    StopReason,
};
use juror_core::{AnswerCorpus, ChoiceId, ParticipantId, QuestionId};

use crate::vote::{argmax, Truths, Weights};

/// Per-question class estimates and per-participant weights of one iteration.
///
/// CRH and CATD produce one-hot estimates; ZenCrowd keeps posteriors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryOutput {
    estimates: ClassEstimates,
    weights: Weights,
}

impl DiscoveryOutput {
    pub fn new(estimates: ClassEstimates, weights: Weights) -> Self {
        Self { estimates, weights }
    }

    /// One-hot estimates over every choice of `corpus`, 1.0 at each truth.
    pub fn from_truths(corpus: &AnswerCorpus, truths: &Truths, weights: Weights) -> Self {
        let estimates = truths
            .iter()
            .map(|(question, truth)| {
                let one_hot = corpus
                    .choices()
                    .map(|choice| (choice.clone(), if choice == truth { 1.0 } else { 0.0 }))
                    .collect();
                (question.clone(), one_hot)
            })
            .collect();
        Self::new(estimates, weights)
    }

    pub fn estimates(&self) -> &ClassEstimates {
        &self.estimates
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn weight(&self, participant: &ParticipantId) -> Option<f64> {
        self.weights.get(participant).copied()
    }

    /// Most probable choice for `question`; the lowest id wins ties.
    pub fn truth(&self, question: &QuestionId) -> Option<&ChoiceId> {
        let posterior = self.estimates.get(question)?;
        argmax(posterior.iter().map(|(choice, p)| (choice, *p)))
    }

    /// Most probable choice for every question.
    pub fn truths(&self) -> Truths {
        self.estimates
            .keys()
            .filter_map(|question| Some((question.clone(), self.truth(question)?.clone())))
            .collect()
    }

    /// Class priors as the mean estimate over all questions.
    pub fn class_probabilities(&self) -> ClassProbabilities {
        let n = self.estimates.len() as f64;
        let mut priors: ClassProbabilities = BTreeMap::new();
        for posterior in self.estimates.values() {
            for (choice, p) in posterior {
                *priors.entry(choice.clone()).or_insert(0.0) += p / n;
            }
        }
        priors
    }

    /// Engine-neutral snapshot. There are no confusion matrices, so the
    /// error rates are empty.
    pub fn to_output(&self) -> Output {
        Output::new(
            self.class_probabilities(),
            ErrorRates::new(),
            self.estimates.clone(),
        )
    }
}

/// Output of a run together with its trace.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryOutcome {
    pub output: DiscoveryOutput,
    pub report: RunReport,
}

impl DiscoveryOutcome {
    pub(crate) fn new(output: DiscoveryOutput, iterations: usize, stop_reason: StopReason) -> Self {
        Self {
            output,
            report: RunReport {
                iterations,
                stop_reason,
                switched_at: None,
                log_likelihoods: Vec::new(),
            },
        }
    }

    pub fn into_inference(self) -> InferenceOutcome {
        InferenceOutcome {
            output: self.output.to_output(),
            report: self.report,
        }
    }
}
