//! Property tests for juror-discovery over small random corpora.

use std::sync::Arc;

use proptest::prelude::*;

use juror_core::config::{DiscoveryAlgorithm, DiscoveryConfig};
use juror_core::{Answer, AnswerCorpus};
use juror_discovery::{CatdEngine, CrhEngine, ZenCrowdEngine};

const CHOICES: [&str; 3] = ["a", "b", "c"];

/// Random answers from up to 4 participants over up to 5 questions.
fn corpus_strategy() -> impl Strategy<Value = AnswerCorpus> {
    prop::collection::vec((0..4u32, 0..5u32, 0..CHOICES.len()), 1..30).prop_map(|triples| {
        AnswerCorpus::new(
            triples
                .into_iter()
                .map(|(p, q, c)| Answer::single(format!("p{p}"), format!("q{q}"), CHOICES[c])),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn crh_truths_were_claimed(corpus in corpus_strategy()) {
        let corpus = Arc::new(corpus);
        let outcome = CrhEngine::new(Arc::clone(&corpus), DiscoveryConfig::default())
            .unwrap()
            .run();

        let truths = outcome.output.truths();
        prop_assert_eq!(truths.len(), corpus.question_count());
        for (question, truth) in &truths {
            prop_assert!(corpus.tallies(question).any(|(_, counts)| counts.contains_key(truth)));
        }
        prop_assert!(outcome.output.weights().values().all(|w| w.is_finite() && *w >= 0.0));
    }

    #[test]
    fn catd_weights_sum_to_one(corpus in corpus_strategy()) {
        let config = DiscoveryConfig::with_algorithm(DiscoveryAlgorithm::Catd);
        let outcome = CatdEngine::new(Arc::new(corpus), config).unwrap().run();
        let total: f64 = outcome.output.weights().values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "weights sum to {total}");
    }

    #[test]
    fn zencrowd_posteriors_are_distributions(corpus in corpus_strategy()) {
        let config = DiscoveryConfig::with_algorithm(DiscoveryAlgorithm::ZenCrowd);
        let outcome = ZenCrowdEngine::new(Arc::new(corpus), config).unwrap().run();
        for (question, posterior) in outcome.output.estimates() {
            let total: f64 = posterior.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "{question}: {posterior:?}");
        }
        for reliability in outcome.output.weights().values() {
            prop_assert!((0.0..=1.0 + 1e-12).contains(reliability));
        }
    }
}
