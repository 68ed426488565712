mod output;
mod reliability;
mod report;
mod verdict;

pub use output::{ClassEstimates, ClassProbabilities, ErrorRateKey, ErrorRates, Output};
pub use reliability::ParticipantReliability;
pub use report::{EmMode, InferenceOutcome, RunReport, StopReason};
pub use verdict::Verdict;
