//! Fixture questions and banks for tests
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the tests of dependent crates.

use serde_json::{Value, json};

use crate::bank::{LoadOptions, QuestionBank};
use crate::question::{Answer, Question, QuestionId};

/// Answer keys used by every fixture question
pub const FIXTURE_KEYS: [&str; 4] = ["A", "B", "C", "D"];

/// Build a four-answer question with `correct` as the correct key
pub fn question(id: QuestionId, subject: &str, correct: &str) -> Question {
    Question {
        id,
        subject: subject.to_string(),
        question_text: format!("Question {id}?"),
        answers: FIXTURE_KEYS
            .iter()
            .map(|key| Answer {
                key: key.to_string(),
                text: format!("Answer {key} to question {id}"),
                correct: *key == correct,
            })
            .collect(),
    }
}

/// The correct key fixture banks assign to question `id`
pub fn fixture_correct_key(id: QuestionId) -> &'static str {
    FIXTURE_KEYS[id.rem_euclid(FIXTURE_KEYS.len() as i64) as usize]
}

/// A wrong key for question `id` in a fixture bank
pub fn fixture_wrong_key(id: QuestionId) -> &'static str {
    FIXTURE_KEYS[(id + 1).rem_euclid(FIXTURE_KEYS.len() as i64) as usize]
}

/// JSON value for a single fixture question, in the bank document format
pub fn question_value(id: QuestionId, subject: &str, correct: &str) -> Value {
    json!({
        "id": id,
        "subject": subject,
        "questionText": format!("Question {id}?"),
        "answers": FIXTURE_KEYS
            .iter()
            .map(|key| json!({
                "key": key,
                "text": format!("Answer {key} to question {id}"),
                "correct": *key == correct,
            }))
            .collect::<Vec<_>>(),
    })
}

/// Bank document with ids `1..=size`, subjects assigned round-robin
pub fn bank_json(size: usize, subjects: &[&str]) -> String {
    let questions: Vec<Value> = (1..=size as QuestionId)
        .map(|id| {
            let subject = subjects[(id as usize - 1) % subjects.len()];
            question_value(id, subject, fixture_correct_key(id))
        })
        .collect();
    Value::Array(questions).to_string()
}

/// Loaded bank with ids `1..=size`, subjects assigned round-robin
pub fn bank(size: usize, subjects: &[&str]) -> QuestionBank {
    QuestionBank::from_json(&bank_json(size, subjects), LoadOptions::default())
        .expect("fixture bank is valid")
}
