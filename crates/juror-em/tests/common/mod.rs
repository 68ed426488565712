//! Shared corpora for the engine integration tests.

use juror_core::{Answer, ChoiceId};

/// Labels from Dawid & Skene (1979), table 1: 45 patients rated by
/// 5 observers, observer 1 three times per patient.
const DAWID_SKENE_1979: [[&[u32]; 5]; 45] = [
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[3, 3, 3], &[4], &[3], &[3], &[4]],
    [&[1, 1, 2], &[2], &[1], &[2], &[2]],
    [&[2, 2, 2], &[3], &[1], &[2], &[1]],
    [&[2, 2, 2], &[3], &[2], &[2], &[2]],
    [&[2, 2, 2], &[3], &[3], &[2], &[2]],
    [&[1, 2, 2], &[2], &[1], &[1], &[1]],
    [&[3, 3, 3], &[3], &[4], &[3], &[3]],
    [&[2, 2, 2], &[2], &[2], &[2], &[3]],
    [&[2, 3, 2], &[2], &[2], &[2], &[3]],
    [&[4, 4, 4], &[4], &[4], &[4], &[4]],
    [&[2, 2, 2], &[3], &[3], &[4], &[3]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[2, 2, 2], &[3], &[2], &[1], &[2]],
    [&[1, 2, 1], &[1], &[1], &[1], &[1]],
    [&[1, 1, 1], &[2], &[1], &[1], &[1]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[2, 2, 2], &[2], &[2], &[2], &[1]],
    [&[2, 2, 2], &[1], &[3], &[2], &[2]],
    [&[2, 2, 2], &[2], &[2], &[2], &[2]],
    [&[2, 2, 2], &[2], &[2], &[2], &[1]],
    [&[2, 2, 2], &[3], &[2], &[2], &[2]],
    [&[2, 2, 1], &[2], &[2], &[2], &[2]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[2, 3, 2], &[2], &[2], &[2], &[2]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[1, 1, 2], &[1], &[1], &[2], &[1]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[3, 3, 3], &[3], &[2], &[3], &[3]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[2, 2, 2], &[2], &[2], &[2], &[2]],
    [&[2, 2, 2], &[3], &[2], &[3], &[2]],
    [&[4, 3, 3], &[4], &[3], &[4], &[3]],
    [&[2, 2, 1], &[2], &[2], &[3], &[2]],
    [&[2, 3, 2], &[3], &[2], &[3], &[3]],
    [&[3, 3, 3], &[3], &[4], &[3], &[2]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[1, 1, 1], &[1], &[1], &[1], &[1]],
    [&[1, 2, 1], &[2], &[1], &[1], &[1]],
    [&[2, 3, 2], &[2], &[2], &[2], &[2]],
    [&[1, 2, 1], &[1], &[1], &[1], &[1]],
    [&[2, 2, 2], &[2], &[2], &[2], &[2]],
];

/// The 1979 patient ratings, participants and questions numbered from 1.
pub fn dawid_skene_1979() -> Vec<Answer> {
    let mut answers = Vec::new();
    for (patient, row) in DAWID_SKENE_1979.iter().enumerate() {
        for (observer, labels) in row.iter().enumerate() {
            let choices = labels.iter().map(|&l| ChoiceId::from(l)).collect();
            let answer = Answer::new(observer as u32 + 1, patient as u32 + 1, choices)
                .expect("every observer labels every patient");
            answers.push(answer);
        }
    }
    answers
}

/// `majority` participants answer "A" on every question, one outlier "B".
pub fn majority_with_outlier(majority: u32, questions: u32) -> Vec<Answer> {
    let mut answers = Vec::new();
    for q in 1..=questions {
        let question = format!("q{q}");
        for p in 1..=majority {
            answers.push(Answer::single(format!("p{p}"), question.as_str(), "A"));
        }
        answers.push(Answer::single("outlier", question.as_str(), "B"));
    }
    answers
}
