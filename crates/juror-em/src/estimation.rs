//! E-step (posterior class estimates) and C-step (hard classification).

use std::collections::BTreeMap;

use juror_core::constants::DISTRIBUTION_TOLERANCE;
use juror_core::ids::ChoiceId;
use juror_core::models::{ClassEstimates, ClassProbabilities, EmMode, ErrorRates};
use juror_core::AnswerCorpus;

use crate::likelihood::joint_probability;
use crate::lookup::RateLookup;

/// E-step, followed by the C-step when `mode` is [`EmMode::Fast`].
pub fn recompute(
    corpus: &AnswerCorpus,
    rates: &ErrorRates,
    priors: &ClassProbabilities,
    mode: EmMode,
) -> ClassEstimates {
    let estimates = expectation(corpus, rates, priors);
    match mode {
        EmMode::Soft => estimates,
        EmMode::Fast => classify(estimates),
    }
}

/// Posterior `T_ij = p_j Π π^n / Σ_j' p_j' Π π^n` for every question and
/// every choice of the corpus.
///
/// If every numerator of a question vanishes its posterior is all zeros.
pub fn expectation(
    corpus: &AnswerCorpus,
    rates: &ErrorRates,
    priors: &ClassProbabilities,
) -> ClassEstimates {
    let lookup = RateLookup::new(rates);

    corpus
        .questions()
        .map(|question| {
            let numerators: Vec<(&ChoiceId, f64)> = corpus
                .choices()
                .map(|truth| (truth, joint_probability(corpus, &lookup, priors, question, truth)))
                .collect();
            let denominator: f64 = numerators.iter().map(|(_, n)| n).sum();

            let posterior = numerators
                .into_iter()
                .map(|(truth, numerator)| {
                    let t = if denominator == 0.0 {
                        0.0
                    } else {
                        numerator / denominator
                    };
                    (truth.clone(), t)
                })
                .collect();
            (question.clone(), posterior)
        })
        .collect()
}

/// C-step: collapse each posterior to a one-hot vector at its maximum.
///
/// Ties go to the lowest choice id. An all-zero posterior stays all zero.
pub fn classify(estimates: ClassEstimates) -> ClassEstimates {
    estimates
        .into_iter()
        .map(|(question, posterior)| (question, one_hot(posterior)))
        .collect()
}

fn one_hot(posterior: BTreeMap<ChoiceId, f64>) -> BTreeMap<ChoiceId, f64> {
    let winner = posterior
        .iter()
        .fold(None::<(&ChoiceId, f64)>, |best, (choice, t)| match best {
            Some((_, best_t)) if *t <= best_t => best,
            _ => Some((choice, *t)),
        })
        .filter(|(_, t)| *t > 0.0)
        .map(|(choice, _)| choice.clone());

    match winner {
        Some(winner) => posterior
            .into_keys()
            .map(|choice| {
                let t = if choice == winner { 1.0 } else { 0.0 };
                (choice, t)
            })
            .collect(),
        None => posterior,
    }
}

/// Whether `posterior` sums to 1 within [`DISTRIBUTION_TOLERANCE`] scaled by its size.
pub fn is_distribution(posterior: &BTreeMap<ChoiceId, f64>) -> bool {
    let sum: f64 = posterior.values().sum();
    (sum - 1.0).abs() <= DISTRIBUTION_TOLERANCE * posterior.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use juror_core::ids::QuestionId;

    fn posterior(entries: &[(&str, f64)]) -> BTreeMap<ChoiceId, f64> {
        entries.iter().map(|(c, t)| (ChoiceId::from(*c), *t)).collect()
    }

    #[test]
    fn classify_picks_maximum() {
        let estimates = ClassEstimates::from([(
            QuestionId::from("q1"),
            posterior(&[("A", 0.2), ("B", 0.7), ("C", 0.1)]),
        )]);
        let hard = classify(estimates);
        let q1 = &hard[&QuestionId::from("q1")];
        assert_eq!(q1[&ChoiceId::from("A")], 0.0);
        assert_eq!(q1[&ChoiceId::from("B")], 1.0);
        assert_eq!(q1[&ChoiceId::from("C")], 0.0);
    }

    #[test]
    fn classify_breaks_ties_on_lowest_choice() {
        let hard = one_hot(posterior(&[("B", 0.5), ("A", 0.5)]));
        assert_eq!(hard[&ChoiceId::from("A")], 1.0);
        assert_eq!(hard[&ChoiceId::from("B")], 0.0);
    }

    #[test]
    fn classify_keeps_all_zero_posterior() {
        let hard = one_hot(posterior(&[("A", 0.0), ("B", 0.0)]));
        assert!(hard.values().all(|t| *t == 0.0));
    }

    #[test]
    fn distribution_check() {
        assert!(is_distribution(&posterior(&[("A", 0.25), ("B", 0.75)])));
        assert!(!is_distribution(&posterior(&[("A", 0.25), ("B", 0.5)])));
    }
}
