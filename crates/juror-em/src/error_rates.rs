//! M-step, part two: per-participant confusion matrices.
//!
//! For participant `k`, true choice `j`, and answered choice `l`:
//!
//! ```text
//! π_kjl = Σ_i T_ij · n_kil / Σ_i T_ij · n_ki
//! ```
//!
//! where `n_kil` counts how often `k` answered `l` on question `i` and `n_ki`
//! is the total number of choices `k` gave on `i`. A zero denominator yields
//! a zero rate.

use std::collections::BTreeMap;

use juror_core::ids::ChoiceId;
use juror_core::models::{ClassEstimates, ErrorRateKey, ErrorRates};
use juror_core::AnswerCorpus;

/// Weighted answer mass of one participant, accumulated over questions.
#[derive(Default)]
struct ConfusionMass<'a> {
    /// (truth, answered) → Σ_i T_ij · n_kil
    numerators: BTreeMap<(&'a ChoiceId, &'a ChoiceId), f64>,
    /// truth → Σ_i T_ij · n_ki
    denominators: BTreeMap<&'a ChoiceId, f64>,
}

/// Error rates for every (participant, answered, truth) triple of the corpus.
pub fn estimate(corpus: &AnswerCorpus, estimates: &ClassEstimates) -> ErrorRates {
    let mut masses: BTreeMap<_, ConfusionMass<'_>> = BTreeMap::new();

    // Questions a participant never answered contribute nothing to either sum,
    // so only answered (participant, question) pairs are visited.
    for (question, per_choice) in estimates {
        for (participant, counts) in corpus.tallies(question) {
            let answered_total: u32 = counts.values().sum();
            let mass = masses.entry(participant).or_default();
            for (truth, t) in per_choice {
                *mass.denominators.entry(truth).or_insert(0.0) += t * f64::from(answered_total);
                for (answered, n) in counts {
                    *mass.numerators.entry((truth, answered)).or_insert(0.0) += t * f64::from(*n);
                }
            }
        }
    }

    let choices: Vec<&ChoiceId> = corpus.choices().collect();
    let mut rates = ErrorRates::new();
    for participant in corpus.participants() {
        let mass = masses.get(participant);
        for &truth in &choices {
            let denominator = mass
                .and_then(|m| m.denominators.get(truth))
                .copied()
                .unwrap_or(0.0);
            for &answered in &choices {
                let rate = if denominator == 0.0 {
                    0.0
                } else {
                    mass.and_then(|m| m.numerators.get(&(truth, answered)))
                        .copied()
                        .unwrap_or(0.0)
                        / denominator
                };
                rates.insert(
                    ErrorRateKey {
                        participant: participant.clone(),
                        answered: answered.clone(),
                        truth: truth.clone(),
                    },
                    rate,
                );
            }
        }
    }
    rates
}

#[cfg(test)]
mod tests {
    use super::*;
    use juror_core::Answer;

    #[test]
    fn every_triple_is_estimated() {
        let corpus = AnswerCorpus::new(vec![
            Answer::single("p1", "q1", "A"),
            Answer::single("p2", "q1", "B"),
            Answer::single("p3", "q2", "C"),
        ]);
        let rates = estimate(&corpus, &crate::initial::estimate(&corpus));
        assert_eq!(rates.len(), 3 * 3 * 3);
    }

    #[test]
    fn zero_denominator_yields_zero_rate() {
        // p2 never answers a question with any mass on C.
        let corpus = AnswerCorpus::new(vec![
            Answer::single("p1", "q1", "A"),
            Answer::single("p2", "q1", "A"),
            Answer::single("p3", "q2", "C"),
        ]);
        let rates = estimate(&corpus, &crate::initial::estimate(&corpus));
        for answered in ["A", "C"] {
            let rate = rates[&ErrorRateKey::new("p2", answered, "C")];
            assert_eq!(rate, 0.0);
            assert!(!rate.is_nan());
        }
        assert_eq!(rates[&ErrorRateKey::new("p2", "A", "A")], 1.0);
    }

    #[test]
    fn rows_of_answered_participant_sum_to_one() {
        let corpus = AnswerCorpus::new(vec![
            Answer::single("p1", "q1", "A"),
            Answer::single("p2", "q1", "B"),
            Answer::new("p1", "q2", vec!["A".into(), "B".into()]).unwrap(),
            Answer::single("p2", "q2", "B"),
        ]);
        let rates = estimate(&corpus, &crate::initial::estimate(&corpus));
        for truth in ["A", "B"] {
            let row: f64 = ["A", "B"]
                .iter()
                .map(|answered| rates[&ErrorRateKey::new("p1", *answered, truth)])
                .sum();
            assert!((row - 1.0).abs() < 1e-12, "row for truth {truth} sums to {row}");
        }
    }
}
