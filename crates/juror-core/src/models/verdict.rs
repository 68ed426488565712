use serde::{Deserialize, Serialize};

use crate::ids::ChoiceId;

/// Final decision for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// A single choice holds the maximal posterior.
    Decided { choice: ChoiceId, agreement: f64 },
    /// Several choices share the maximal posterior, or every posterior is zero.
    Undecidable { tied: Vec<ChoiceId>, agreement: f64 },
}

impl Verdict {
    /// The decided choice, if any.
    pub fn choice(&self) -> Option<&ChoiceId> {
        match self {
            Self::Decided { choice, .. } => Some(choice),
            Self::Undecidable { .. } => None,
        }
    }

    /// Posterior mass of the winning choice (or of each tied choice).
    pub fn agreement(&self) -> f64 {
        match self {
            Self::Decided { agreement, .. } | Self::Undecidable { agreement, .. } => *agreement,
        }
    }

    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Decided { .. })
    }
}
