//! Log-likelihood of the current parameter estimates.
//!
//! ```text
//! log L = Σ_i log( Σ_j p_j · Π_k Π_l π_kjl ^ n_kil )
//! ```
//!
//! Under soft EM this should not decrease from one iteration to the next.

use juror_core::ids::{ChoiceId, QuestionId};
use juror_core::models::{ClassProbabilities, ErrorRates};
use juror_core::AnswerCorpus;

use crate::lookup::RateLookup;

/// Log-likelihood of `priors` and `rates` over the whole corpus.
///
/// Questions whose total probability mass is exactly zero are skipped rather
/// than driving the sum to negative infinity.
pub fn log_likelihood(
    corpus: &AnswerCorpus,
    priors: &ClassProbabilities,
    rates: &ErrorRates,
) -> f64 {
    let lookup = RateLookup::new(rates);

    corpus
        .questions()
        .filter_map(|question| {
            let mass: f64 = corpus
                .choices()
                .map(|truth| joint_probability(corpus, &lookup, priors, question, truth))
                .sum();
            if mass == 0.0 {
                tracing::debug!(question = %question, "question has no likelihood mass, skipped");
                None
            } else {
                Some(mass.ln())
            }
        })
        .sum()
}

/// `p_j · Π_k Π_l π_kjl ^ n_kil` for one question and one candidate truth.
///
/// Rates missing from `lookup` are skipped (treated as 1).
pub(crate) fn joint_probability(
    corpus: &AnswerCorpus,
    lookup: &RateLookup<'_>,
    priors: &ClassProbabilities,
    question: &QuestionId,
    truth: &ChoiceId,
) -> f64 {
    let prior = priors.get(truth).copied().unwrap_or(0.0);
    let product = corpus
        .tallies(question)
        .fold(1.0, |acc, (participant, counts)| {
            counts.iter().fold(acc, |acc, (answered, n)| {
                match lookup.get(participant, answered, truth) {
                    Some(rate) => acc * rate.powi(*n as i32),
                    None => acc,
                }
            })
        });
    prior * product
}
