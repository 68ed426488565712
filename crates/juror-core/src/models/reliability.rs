use serde::{Deserialize, Serialize};

use crate::ids::ParticipantId;
use crate::quality::WorkerQuality;

/// Reliability of one participant derived from a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantReliability {
    pub participant: ParticipantId,
    /// Prior-weighted probability of answering the true choice.
    pub accuracy: f64,
    /// Questions the participant answered.
    pub answered: usize,
    /// Answered questions whose decided verdict the participant did not select.
    pub disagreements: usize,
    pub quality: WorkerQuality,
}
