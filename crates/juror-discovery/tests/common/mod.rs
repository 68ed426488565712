//! Shared corpora for the discovery integration tests.

use juror_core::Answer;

pub const EXPERTS: [&str; 2] = ["e1", "e2"];
pub const SPAMMERS: [&str; 3] = ["s1", "s2", "s3"];

/// Two experts who are always right (`A`) and three spammers.
///
/// On `q0..q5` one spammer agrees with the experts and the other two pick
/// `B` and `C`, so the majority is right. On `q6` the spammers all say `B`
/// and outvote the experts.
pub fn experts_and_spammers() -> Vec<Answer> {
    let mut answers = Vec::new();
    for q in 0..6 {
        let question = format!("q{q}");
        for expert in EXPERTS {
            answers.push(Answer::single(expert, question.as_str(), "A"));
        }
        for (i, spammer) in SPAMMERS.iter().enumerate() {
            let choice = match (i + 3 - q % 3) % 3 {
                0 => "A",
                1 => "B",
                _ => "C",
            };
            answers.push(Answer::single(*spammer, question.as_str(), choice));
        }
    }
    for expert in EXPERTS {
        answers.push(Answer::single(expert, "q6", "A"));
    }
    for spammer in SPAMMERS {
        answers.push(Answer::single(spammer, "q6", "B"));
    }
    answers
}

/// Every participant gives the same answer to every question.
pub fn unanimous() -> Vec<Answer> {
    let mut answers = Vec::new();
    for q in 0..3 {
        for p in 0..3 {
            answers.push(Answer::single(format!("p{p}"), format!("q{q}"), "A"));
        }
    }
    answers
}
