use std::collections::BTreeMap;

use juror_core::ids::{ChoiceId, QuestionId};
use juror_core::models::{ErrorRateKey, Output, Verdict};

fn sample_output() -> Output {
    let priors = BTreeMap::from([(ChoiceId::from("A"), 0.75), (ChoiceId::from("B"), 0.25)]);
    let rates = BTreeMap::from([
        (ErrorRateKey::new("p1", "A", "A"), 0.9),
        (ErrorRateKey::new("p1", "B", "A"), 0.1),
    ]);
    let estimates = BTreeMap::from([(
        QuestionId::from("q1"),
        BTreeMap::from([(ChoiceId::from("A"), 1.0), (ChoiceId::from("B"), 0.0)]),
    )]);
    Output::new(priors, rates, estimates)
}

#[test]
fn absent_entries_read_as_zero() {
    let output = sample_output();
    assert_eq!(output.probability(&QuestionId::from("q1"), &ChoiceId::from("C")), 0.0);
    assert_eq!(output.probability(&QuestionId::from("q9"), &ChoiceId::from("A")), 0.0);
    assert_eq!(output.prior(&ChoiceId::from("C")), 0.0);
    assert_eq!(output.error_rate(&ErrorRateKey::new("p2", "A", "A")), None);
}

#[test]
fn json_export_flattens_error_rates() {
    let output = sample_output();
    let json = output.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let records = value["error_rates"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["participant"], "p1");

    let back: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(back, output);
}

#[test]
fn verdict_accessors() {
    let decided = Verdict::Decided {
        choice: ChoiceId::from("A"),
        agreement: 0.8,
    };
    assert!(decided.is_decided());
    assert_eq!(decided.choice(), Some(&ChoiceId::from("A")));

    let tie = Verdict::Undecidable {
        tied: vec![ChoiceId::from("A"), ChoiceId::from("B")],
        agreement: 0.5,
    };
    assert_eq!(tie.choice(), None);
    assert_eq!(tie.agreement(), 0.5);
}
