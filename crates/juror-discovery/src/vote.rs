//! Majority and weighted voting over the per-question tallies.
//!
//! Every occurrence of a choice in an answer is one claim, so a
//! multi-choice answer votes for each of its choices.

use std::collections::BTreeMap;

use juror_core::{AnswerCorpus, ChoiceId, ParticipantId, QuestionId};

/// The single choice believed true for every question.
pub type Truths = BTreeMap<QuestionId, ChoiceId>;

/// Weight or reliability per participant.
pub type Weights = BTreeMap<ParticipantId, f64>;

/// Claims a participant made and how many disagree with the current truths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClaimStats {
    pub claims: u32,
    pub mismatches: u32,
}

/// Unweighted vote: every claim counts once.
pub fn majority(corpus: &AnswerCorpus) -> Truths {
    vote(corpus, |_| 1.0)
}

/// Vote with each claim counted at its participant's weight.
///
/// Participants missing from `weights` count zero.
pub fn weighted(corpus: &AnswerCorpus, weights: &Weights) -> Truths {
    vote(corpus, |participant| weights.get(participant).copied().unwrap_or(0.0))
}

fn vote(corpus: &AnswerCorpus, weight: impl Fn(&ParticipantId) -> f64) -> Truths {
    corpus
        .questions()
        .filter_map(|question| {
            let mut scores: BTreeMap<&ChoiceId, f64> = BTreeMap::new();
            for (participant, counts) in corpus.tallies(question) {
                let w = weight(participant);
                for (choice, n) in counts {
                    *scores.entry(choice).or_insert(0.0) += w * f64::from(*n);
                }
            }
            argmax(scores).map(|choice| (question.clone(), choice.clone()))
        })
        .collect()
}

/// Highest-scoring key of an ascending sequence; the lowest key wins ties.
pub(crate) fn argmax<K>(scores: impl IntoIterator<Item = (K, f64)>) -> Option<K> {
    let mut best: Option<(K, f64)> = None;
    for (key, score) in scores {
        if best.as_ref().map_or(true, |(_, top)| score > *top) {
            best = Some((key, score));
        }
    }
    best.map(|(key, _)| key)
}

/// Claim and mismatch counts of every participant against `truths`.
pub fn claim_stats(corpus: &AnswerCorpus, truths: &Truths) -> BTreeMap<ParticipantId, ClaimStats> {
    let mut stats: BTreeMap<ParticipantId, ClaimStats> = corpus
        .participants()
        .map(|participant| (participant.clone(), ClaimStats::default()))
        .collect();

    for question in corpus.questions() {
        let truth = truths.get(question);
        for (participant, counts) in corpus.tallies(question) {
            let entry = stats.entry(participant.clone()).or_default();
            for (choice, n) in counts {
                entry.claims += n;
                if truth != Some(choice) {
                    entry.mismatches += n;
                }
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use juror_core::Answer;

    fn corpus() -> AnswerCorpus {
        AnswerCorpus::new(vec![
            Answer::single("p1", "q1", "A"),
            Answer::single("p2", "q1", "B"),
            Answer::single("p3", "q1", "B"),
            Answer::single("p1", "q2", "B"),
            Answer::single("p2", "q2", "A"),
        ])
    }

    #[test]
    fn majority_breaks_ties_towards_lowest_choice() {
        let truths = majority(&corpus());
        assert_eq!(truths[&QuestionId::from("q1")], ChoiceId::from("B"));
        assert_eq!(truths[&QuestionId::from("q2")], ChoiceId::from("A"));
    }

    #[test]
    fn weights_overturn_the_majority() {
        let weights = Weights::from([
            (ParticipantId::from("p1"), 5.0),
            (ParticipantId::from("p2"), 1.0),
            (ParticipantId::from("p3"), 1.0),
        ]);
        let truths = weighted(&corpus(), &weights);
        assert_eq!(truths[&QuestionId::from("q1")], ChoiceId::from("A"));
        assert_eq!(truths[&QuestionId::from("q2")], ChoiceId::from("B"));
    }

    #[test]
    fn multi_choice_answers_claim_every_choice() {
        let corpus = AnswerCorpus::new(vec![
            Answer::new("p1", "q1", vec![ChoiceId::from("A"), ChoiceId::from("B")]).unwrap(),
            Answer::single("p2", "q1", "A"),
        ]);
        let truths = majority(&corpus);
        let stats = claim_stats(&corpus, &truths);
        assert_eq!(stats[&ParticipantId::from("p1")], ClaimStats { claims: 2, mismatches: 1 });
        assert_eq!(stats[&ParticipantId::from("p2")], ClaimStats { claims: 1, mismatches: 0 });
    }

    #[test]
    fn argmax_of_nothing_is_none() {
        assert_eq!(argmax(Vec::<(u8, f64)>::new()), None);
        assert_eq!(argmax([(1, 2.0), (2, 2.0), (3, 1.0)]), Some(1));
    }
}
