mod corpus;

pub use corpus::AnswerCorpus;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{InputError, JurorError, JurorResult};
use crate::ids::{ChoiceId, ParticipantId, QuestionId};

/// One participant's response to one question.
///
/// A single answer may select several choices, and may repeat a choice.
/// The choice list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AnswerRecord")]
pub struct Answer {
    participant: ParticipantId,
    question: QuestionId,
    choices: Vec<ChoiceId>,
}

/// Wire shape of an [`Answer`], validated through [`Answer::new`].
#[derive(Deserialize)]
struct AnswerRecord {
    participant: ParticipantId,
    question: QuestionId,
    choices: Vec<ChoiceId>,
}

impl TryFrom<AnswerRecord> for Answer {
    type Error = JurorError;

    fn try_from(record: AnswerRecord) -> JurorResult<Self> {
        Answer::new(record.participant, record.question, record.choices)
    }
}

impl Answer {
    /// Create an answer, rejecting an empty choice list.
    pub fn new(
        participant: impl Into<ParticipantId>,
        question: impl Into<QuestionId>,
        choices: Vec<ChoiceId>,
    ) -> JurorResult<Self> {
        let participant = participant.into();
        let question = question.into();
        if choices.is_empty() {
            return Err(InputError::EmptyChoices {
                participant: participant.to_string(),
                question: question.to_string(),
            }
            .into());
        }
        Ok(Self {
            participant,
            question,
            choices,
        })
    }

    /// Convenience constructor for the common single-label case.
    pub fn single(
        participant: impl Into<ParticipantId>,
        question: impl Into<QuestionId>,
        choice: impl Into<ChoiceId>,
    ) -> Self {
        Self {
            participant: participant.into(),
            question: question.into(),
            choices: vec![choice.into()],
        }
    }

    pub fn participant(&self) -> &ParticipantId {
        &self.participant
    }

    pub fn question(&self) -> &QuestionId {
        &self.question
    }

    pub fn choices(&self) -> &[ChoiceId] {
        &self.choices
    }

    /// How often each choice occurs in this answer.
    pub fn choice_counts(&self) -> BTreeMap<&ChoiceId, u32> {
        let mut counts = BTreeMap::new();
        for choice in &self.choices {
            *counts.entry(choice).or_insert(0) += 1;
        }
        counts
    }

    /// Number of times `choice` occurs in this answer.
    pub fn count_of(&self, choice: &ChoiceId) -> u32 {
        self.choices.iter().filter(|c| *c == choice).count() as u32
    }
}
