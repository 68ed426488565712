//! Weights → weighted vote loop shared by CRH and CATD.

use juror_core::models::StopReason;
use juror_core::AnswerCorpus;

use crate::convergence::WeightConvergence;
use crate::vote::{self, Truths, Weights};

pub(crate) struct VoteRun {
    pub truths: Truths,
    pub weights: Weights,
    pub iterations: usize,
    pub stop_reason: StopReason,
}

/// Start from the majority vote and alternate `weigh` with a weighted vote.
///
/// The stopping iteration's truths and weights are returned.
pub(crate) fn iterate(
    corpus: &AnswerCorpus,
    controller: WeightConvergence,
    weigh: impl Fn(&Truths) -> Weights,
) -> VoteRun {
    let mut truths = vote::majority(corpus);
    let mut previous: Option<Weights> = None;
    let mut iteration = 0;

    loop {
        iteration += 1;
        let weights = weigh(&truths);
        truths = vote::weighted(corpus, &weights);
        tracing::debug!(iteration, "weights and truths re-estimated");

        if let Some(stop_reason) = controller.observe(iteration, previous.as_ref(), &weights) {
            return VoteRun {
                truths,
                weights,
                iterations: iteration,
                stop_reason,
            };
        }
        previous = Some(weights);
    }
}
