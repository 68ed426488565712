//! Seed estimates from raw vote counts.

use std::collections::BTreeMap;

use juror_core::ids::{ChoiceId, QuestionId};
use juror_core::models::ClassEstimates;
use juror_core::AnswerCorpus;

/// Initial class estimates for every question in the corpus.
pub fn estimate(corpus: &AnswerCorpus) -> ClassEstimates {
    corpus
        .questions()
        .map(|question| (question.clone(), for_question(corpus, question)))
        .collect()
}

/// Share of each choice among all choice occurrences on `question`.
///
/// Multi-choice answers are flattened. Every choice with a nonzero count is
/// kept; ties are left as they are.
pub fn for_question(corpus: &AnswerCorpus, question: &QuestionId) -> BTreeMap<ChoiceId, f64> {
    let counts = corpus
        .tallies(question)
        .flat_map(|(_, counts)| counts.iter())
        .fold(BTreeMap::new(), |mut acc, (choice, n)| {
            *acc.entry(choice).or_insert(0u32) += *n;
            acc
        });
    let total: u32 = counts.values().sum();

    counts
        .into_iter()
        .map(|(choice, n)| (choice.clone(), f64::from(n) / f64::from(total)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use juror_core::Answer;

    #[test]
    fn counts_are_normalized_per_question() {
        let corpus = AnswerCorpus::new(vec![
            Answer::single("p1", "q1", "A"),
            Answer::single("p2", "q1", "A"),
            Answer::new("p3", "q1", vec!["A".into(), "B".into()]).unwrap(),
            Answer::single("p1", "q2", "C"),
        ]);
        let estimates = estimate(&corpus);

        let q1 = &estimates[&QuestionId::from("q1")];
        assert!((q1[&ChoiceId::from("A")] - 0.75).abs() < 1e-12);
        assert!((q1[&ChoiceId::from("B")] - 0.25).abs() < 1e-12);
        assert!(!q1.contains_key(&ChoiceId::from("C")));

        let q2 = &estimates[&QuestionId::from("q2")];
        assert_eq!(q2.len(), 1);
        assert_eq!(q2[&ChoiceId::from("C")], 1.0);
    }

    #[test]
    fn tie_keeps_both_choices() {
        let corpus = AnswerCorpus::new(vec![
            Answer::single("p1", "q1", "A"),
            Answer::single("p2", "q1", "B"),
        ]);
        let q1 = for_question(&corpus, &QuestionId::from("q1"));
        assert_eq!(q1[&ChoiceId::from("A")], 0.5);
        assert_eq!(q1[&ChoiceId::from("B")], 0.5);
    }
}
