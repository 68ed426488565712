//! # juror-core
//!
//! Foundation crate for juror.
//! Defines identifiers, answers and their indexes, inference outputs, errors,
//! config, and the traits the engine and batch crates implement.

pub mod answer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod models;
pub mod quality;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use answer::{Answer, AnswerCorpus};
pub use config::JurorConfig;
pub use errors::{JurorError, JurorResult};
pub use ids::{ChoiceId, ParticipantId, QuestionId};
pub use models::{ErrorRateKey, InferenceOutcome, Output, RunReport, StopReason, Verdict};
pub use quality::{QualityInfluence, QualityInfluenceKind, WorkerQuality};
