use std::collections::BTreeMap;

use juror_core::ids::{ChoiceId, ParticipantId};
use juror_core::models::ErrorRates;

type ByTruth<'a> = BTreeMap<&'a ChoiceId, f64>;

/// Borrowed view of error rates nested as participant → answered → truth,
/// so hot loops can look rates up without building owned keys.
pub(crate) struct RateLookup<'a> {
    rates: BTreeMap<&'a ParticipantId, BTreeMap<&'a ChoiceId, ByTruth<'a>>>,
}

impl<'a> RateLookup<'a> {
    pub(crate) fn new(rates: &'a ErrorRates) -> Self {
        let mut nested: BTreeMap<&'a ParticipantId, BTreeMap<&'a ChoiceId, ByTruth<'a>>> =
            BTreeMap::new();
        for (key, rate) in rates {
            nested
                .entry(&key.participant)
                .or_default()
                .entry(&key.answered)
                .or_default()
                .insert(&key.truth, *rate);
        }
        Self { rates: nested }
    }

    pub(crate) fn get(
        &self,
        participant: &ParticipantId,
        answered: &ChoiceId,
        truth: &ChoiceId,
    ) -> Option<f64> {
        self.rates
            .get(participant)
            .and_then(|by_answer| by_answer.get(answered))
            .and_then(|by_truth| by_truth.get(truth))
            .copied()
    }
}
