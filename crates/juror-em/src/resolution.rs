//! Turn per-question posteriors into final verdicts.

use std::collections::BTreeMap;

use juror_core::ids::{ChoiceId, QuestionId};
use juror_core::models::{Output, Verdict};

/// One verdict per question of `output`.
pub fn resolve_verdicts(output: &Output) -> BTreeMap<QuestionId, Verdict> {
    output
        .class_estimations()
        .iter()
        .map(|(question, posterior)| (question.clone(), resolve(posterior)))
        .collect()
}

/// Verdict for a single posterior.
///
/// The agreement is the maximal posterior. A unique positive maximum is
/// decided; shared maxima (or an all-zero posterior) are undecidable.
pub fn resolve(posterior: &BTreeMap<ChoiceId, f64>) -> Verdict {
    let agreement = posterior.values().copied().fold(0.0, f64::max);
    let tied: Vec<ChoiceId> = posterior
        .iter()
        .filter(|(_, t)| **t == agreement)
        .map(|(choice, _)| choice.clone())
        .collect();

    match tied.as_slice() {
        [choice] if agreement > 0.0 => Verdict::Decided {
            choice: choice.clone(),
            agreement,
        },
        _ => Verdict::Undecidable { tied, agreement },
    }
}
