//! Property tests for juror-em over small random corpora.

use proptest::prelude::*;

use juror_core::Answer;
use juror_em::estimation::is_distribution;
use juror_em::EmEngine;

const CHOICES: [&str; 3] = ["a", "b", "c"];

/// Random answers from up to 4 participants over up to 5 questions.
fn corpus_strategy() -> impl Strategy<Value = Vec<Answer>> {
    prop::collection::vec((0..4u32, 0..5u32, 0..CHOICES.len()), 1..30).prop_map(|triples| {
        triples
            .into_iter()
            .map(|(p, q, c)| Answer::single(format!("p{p}"), format!("q{q}"), CHOICES[c]))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn error_rates_are_probabilities(answers in corpus_strategy(), threshold in 0.0..=1.0f64) {
        let output = EmEngine::hybrid(answers, threshold).unwrap().run();
        for (key, rate) in output.error_rates() {
            prop_assert!((0.0..=1.0 + 1e-9).contains(rate), "{key:?} = {rate}");
        }
    }

    #[test]
    fn priors_sum_to_one(answers in corpus_strategy(), threshold in 0.0..=1.0f64) {
        let output = EmEngine::hybrid(answers, threshold).unwrap().run();
        let total: f64 = output.class_probabilities().values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "priors sum to {total}");
    }

    #[test]
    fn posteriors_are_distributions(answers in corpus_strategy()) {
        let output = EmEngine::classic(answers).unwrap().run();
        for (question, posterior) in output.class_estimations() {
            prop_assert!(is_distribution(posterior), "{question}: {posterior:?}");
        }
    }

    #[test]
    fn reruns_agree(answers in corpus_strategy(), threshold in 0.0..=1.0f64) {
        let first = EmEngine::hybrid(answers.clone(), threshold).unwrap().run();
        let second = EmEngine::hybrid(answers, threshold).unwrap().run();
        prop_assert_eq!(first, second);
    }
}
