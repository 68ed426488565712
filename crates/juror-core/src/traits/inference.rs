use crate::answer::AnswerCorpus;
use crate::models::InferenceOutcome;

/// A truth-inference algorithm over a closed answer set.
pub trait ITruthInference: Send + Sync {
    /// Short algorithm name for logs and reports.
    fn name(&self) -> &'static str;

    /// The corpus this instance runs on.
    fn corpus(&self) -> &AnswerCorpus;

    /// Run to convergence or to the iteration cap.
    fn infer(&self) -> InferenceOutcome;
}
