//! Read-only indexes over a fixed answer set.

use std::collections::BTreeMap;

use crate::answer::Answer;
use crate::ids::{ChoiceId, ParticipantId, QuestionId};

/// Per-choice occurrence counts of one participant on one question,
/// merged over all of that participant's answers to the question.
pub type ChoiceCounts = BTreeMap<ChoiceId, u32>;

/// Answer set indexed by question, participant, choice, and (participant, question).
///
/// Built once and never mutated. Lookups for unknown keys return empty
/// collections. Repeated answers are kept as-is; the choice index is a
/// multiset holding an answer once per occurrence of the choice.
#[derive(Debug, Clone)]
pub struct AnswerCorpus {
    answers: Vec<Answer>,
    by_question: BTreeMap<QuestionId, Vec<usize>>,
    by_participant: BTreeMap<ParticipantId, Vec<usize>>,
    by_choice: BTreeMap<ChoiceId, Vec<usize>>,
    by_pair: BTreeMap<ParticipantId, BTreeMap<QuestionId, Vec<usize>>>,
    tallies: BTreeMap<QuestionId, BTreeMap<ParticipantId, ChoiceCounts>>,
}

impl AnswerCorpus {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        let answers: Vec<Answer> = answers.into_iter().collect();

        let mut by_question: BTreeMap<QuestionId, Vec<usize>> = BTreeMap::new();
        let mut by_participant: BTreeMap<ParticipantId, Vec<usize>> = BTreeMap::new();
        let mut by_choice: BTreeMap<ChoiceId, Vec<usize>> = BTreeMap::new();
        let mut by_pair: BTreeMap<ParticipantId, BTreeMap<QuestionId, Vec<usize>>> =
            BTreeMap::new();
        let mut tallies: BTreeMap<QuestionId, BTreeMap<ParticipantId, ChoiceCounts>> =
            BTreeMap::new();

        for (idx, answer) in answers.iter().enumerate() {
            by_question
                .entry(answer.question().clone())
                .or_default()
                .push(idx);
            by_participant
                .entry(answer.participant().clone())
                .or_default()
                .push(idx);
            by_pair
                .entry(answer.participant().clone())
                .or_default()
                .entry(answer.question().clone())
                .or_default()
                .push(idx);

            let counts = tallies
                .entry(answer.question().clone())
                .or_default()
                .entry(answer.participant().clone())
                .or_default();
            for choice in answer.choices() {
                by_choice.entry(choice.clone()).or_default().push(idx);
                *counts.entry(choice.clone()).or_insert(0) += 1;
            }
        }

        tracing::info!(
            answers = answers.len(),
            questions = by_question.len(),
            participants = by_participant.len(),
            choices = by_choice.len(),
            "answer corpus built"
        );

        Self {
            answers,
            by_question,
            by_participant,
            by_choice,
            by_pair,
            tallies,
        }
    }

    /// All answers, in insertion order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answers given to `question`.
    pub fn for_question(&self, question: &QuestionId) -> Vec<&Answer> {
        self.resolve(self.by_question.get(question))
    }

    /// Answers given by `participant`.
    pub fn for_participant(&self, participant: &ParticipantId) -> Vec<&Answer> {
        self.resolve(self.by_participant.get(participant))
    }

    /// Answers mentioning `choice`, once per occurrence.
    pub fn for_choice(&self, choice: &ChoiceId) -> Vec<&Answer> {
        self.resolve(self.by_choice.get(choice))
    }

    /// Answers `participant` gave to `question`.
    pub fn for_pair(&self, participant: &ParticipantId, question: &QuestionId) -> Vec<&Answer> {
        self.resolve(
            self.by_pair
                .get(participant)
                .and_then(|questions| questions.get(question)),
        )
    }

    /// Choice counts for every participant who answered `question`.
    pub fn tallies(
        &self,
        question: &QuestionId,
    ) -> impl Iterator<Item = (&ParticipantId, &ChoiceCounts)> {
        self.tallies.get(question).into_iter().flat_map(|m| m.iter())
    }

    /// Choice counts of `participant` on `question`, if they answered it.
    pub fn tally(
        &self,
        participant: &ParticipantId,
        question: &QuestionId,
    ) -> Option<&ChoiceCounts> {
        self.tallies
            .get(question)
            .and_then(|participants| participants.get(participant))
    }

    /// Distinct questions in ascending order.
    pub fn questions(&self) -> impl Iterator<Item = &QuestionId> {
        self.by_question.keys()
    }

    /// Distinct participants in ascending order.
    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> {
        self.by_participant.keys()
    }

    /// Distinct choices in ascending order.
    pub fn choices(&self) -> impl Iterator<Item = &ChoiceId> {
        self.by_choice.keys()
    }

    pub fn question_count(&self) -> usize {
        self.by_question.len()
    }

    pub fn participant_count(&self) -> usize {
        self.by_participant.len()
    }

    pub fn choice_count(&self) -> usize {
        self.by_choice.len()
    }

    /// Order-independent blake3 hash of the answer set, hex encoded.
    ///
    /// Two corpora built from the same answers in any order share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut lines: Vec<String> = self
            .answers
            .iter()
            .map(|a| {
                let choices: Vec<&str> = a.choices().iter().map(ChoiceId::as_str).collect();
                format!(
                    "{}\u{1f}{}\u{1f}{}",
                    a.participant(),
                    a.question(),
                    choices.join("\u{1e}")
                )
            })
            .collect();
        lines.sort_unstable();

        let mut hasher = blake3::Hasher::new();
        for line in &lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize().to_hex().to_string()
    }

    fn resolve(&self, indexes: Option<&Vec<usize>>) -> Vec<&Answer> {
        indexes
            .map(|idx| idx.iter().map(|&i| &self.answers[i]).collect())
            .unwrap_or_default()
    }
}

impl FromIterator<Answer> for AnswerCorpus {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        Self::new(iter)
    }
}
