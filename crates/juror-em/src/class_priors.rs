//! M-step, part one: marginal class probabilities.

use juror_core::models::{ClassEstimates, ClassProbabilities};
use juror_core::AnswerCorpus;

/// `p_j = Σ_i T_ij / |questions|`.
///
/// The corpus must contain at least one question.
pub fn estimate(corpus: &AnswerCorpus, estimates: &ClassEstimates) -> ClassProbabilities {
    let nr_questions = corpus.question_count() as f64;

    estimates
        .values()
        .flat_map(|per_choice| per_choice.iter())
        .fold(ClassProbabilities::new(), |mut sums, (choice, t)| {
            *sums.entry(choice.clone()).or_insert(0.0) += *t;
            sums
        })
        .into_iter()
        .map(|(choice, sum)| (choice, sum / nr_questions))
        .collect()
}
