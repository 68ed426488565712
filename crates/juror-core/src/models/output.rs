use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::JurorResult;
use crate::ids::{ChoiceId, ParticipantId, QuestionId};

/// Per question, the probability of each choice being the true one.
pub type ClassEstimates = BTreeMap<QuestionId, BTreeMap<ChoiceId, f64>>;

/// Marginal prior of each choice across all questions.
pub type ClassProbabilities = BTreeMap<ChoiceId, f64>;

/// P(participant answers `answered` | true choice is `truth`).
pub type ErrorRates = BTreeMap<ErrorRateKey, f64>;

/// Key of one cell of a participant's confusion matrix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorRateKey {
    pub participant: ParticipantId,
    pub answered: ChoiceId,
    pub truth: ChoiceId,
}

impl ErrorRateKey {
    pub fn new(
        participant: impl Into<ParticipantId>,
        answered: impl Into<ChoiceId>,
        truth: impl Into<ChoiceId>,
    ) -> Self {
        Self {
            participant: participant.into(),
            answered: answered.into(),
            truth: truth.into(),
        }
    }
}

/// Snapshot of one completed EM iteration.
///
/// Serializes error rates as a flat list of records so the snapshot can be
/// exported as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    class_probabilities: ClassProbabilities,
    #[serde(with = "error_rate_records")]
    error_rates: ErrorRates,
    class_estimations: ClassEstimates,
}

impl Output {
    pub fn new(
        class_probabilities: ClassProbabilities,
        error_rates: ErrorRates,
        class_estimations: ClassEstimates,
    ) -> Self {
        Self {
            class_probabilities,
            error_rates,
            class_estimations,
        }
    }

    pub fn class_probabilities(&self) -> &ClassProbabilities {
        &self.class_probabilities
    }

    pub fn error_rates(&self) -> &ErrorRates {
        &self.error_rates
    }

    pub fn class_estimations(&self) -> &ClassEstimates {
        &self.class_estimations
    }

    /// Posterior of `choice` on `question`; 0.0 when absent.
    pub fn probability(&self, question: &QuestionId, choice: &ChoiceId) -> f64 {
        self.class_estimations
            .get(question)
            .and_then(|estimates| estimates.get(choice))
            .copied()
            .unwrap_or(0.0)
    }

    /// Prior of `choice`; 0.0 when absent.
    pub fn prior(&self, choice: &ChoiceId) -> f64 {
        self.class_probabilities.get(choice).copied().unwrap_or(0.0)
    }

    pub fn error_rate(&self, key: &ErrorRateKey) -> Option<f64> {
        self.error_rates.get(key).copied()
    }

    pub fn to_json(&self) -> JurorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

mod error_rate_records {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{ErrorRateKey, ErrorRates};
    use crate::ids::{ChoiceId, ParticipantId};

    #[derive(Serialize, Deserialize)]
    struct Record {
        participant: ParticipantId,
        answered: ChoiceId,
        truth: ChoiceId,
        rate: f64,
    }

    pub fn serialize<S: Serializer>(rates: &ErrorRates, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(rates.iter().map(|(key, rate)| Record {
            participant: key.participant.clone(),
            answered: key.answered.clone(),
            truth: key.truth.clone(),
            rate: *rate,
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ErrorRates, D::Error> {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records
            .into_iter()
            .map(|r| {
                (
                    ErrorRateKey {
                        participant: r.participant,
                        answered: r.answered,
                        truth: r.truth,
                    },
                    r.rate,
                )
            })
            .collect())
    }
}
