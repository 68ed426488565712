/// Answer-set preconditions the EM engine relies on.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("answer of participant {participant} on question {question} selects no choice")]
    EmptyChoices {
        participant: String,
        question: String,
    },

    #[error("answer corpus is empty")]
    EmptyCorpus,

    #[error("switch threshold {value} outside [0, 1]")]
    SwitchThresholdOutOfRange { value: f64 },

    #[error("significance level {value} outside (0, 1)")]
    SignificanceOutOfRange { value: f64 },
}
