//! Participant reliability from a finished run.

use std::collections::{BTreeMap, BTreeSet};

use juror_core::config::QualityConfig;
use juror_core::errors::JurorResult;
use juror_core::ids::ParticipantId;
use juror_core::models::{ErrorRateKey, Output, ParticipantReliability};
use juror_core::quality::QualityInfluence;
use juror_core::AnswerCorpus;

use crate::resolution::resolve_verdicts;

/// Reliability of every participant in `corpus` under `output`.
///
/// `accuracy` is the prior-weighted diagonal of the participant's confusion
/// matrix, i.e. the probability they answer the true choice of a random
/// question. `quality` comes from `influence` applied to the number of
/// answered questions and the number of decided verdicts the participant
/// did not select.
pub fn assess_reliability(
    corpus: &AnswerCorpus,
    output: &Output,
    influence: &dyn QualityInfluence,
    alpha: f64,
) -> JurorResult<BTreeMap<ParticipantId, ParticipantReliability>> {
    let verdicts = resolve_verdicts(output);

    corpus
        .participants()
        .map(|participant| {
            let accuracy = output
                .class_probabilities()
                .iter()
                .map(|(choice, prior)| {
                    let key = ErrorRateKey {
                        participant: participant.clone(),
                        answered: choice.clone(),
                        truth: choice.clone(),
                    };
                    prior * output.error_rate(&key).unwrap_or(0.0)
                })
                .sum::<f64>();

            let questions: BTreeSet<_> = corpus
                .for_participant(participant)
                .into_iter()
                .map(|answer| answer.question())
                .collect();
            let disagreements = questions
                .iter()
                .filter(|question| {
                    let decided = verdicts.get(**question).and_then(|v| v.choice());
                    let selected = corpus.tally(participant, question);
                    match (decided, selected) {
                        (Some(choice), Some(counts)) => !counts.contains_key(choice),
                        _ => false,
                    }
                })
                .count();

            let quality =
                influence.estimate(questions.len() as f64, disagreements as f64, alpha)?;

            Ok((
                participant.clone(),
                ParticipantReliability {
                    participant: participant.clone(),
                    accuracy,
                    answered: questions.len(),
                    disagreements,
                    quality,
                },
            ))
        })
        .collect()
}

/// [`assess_reliability`] with the strategy and steepness of a `[quality]` section.
pub fn assess_reliability_with(
    corpus: &AnswerCorpus,
    output: &Output,
    config: &QualityConfig,
) -> JurorResult<BTreeMap<ParticipantId, ParticipantReliability>> {
    assess_reliability(corpus, output, &config.influence, config.alpha)
}
