//! Question records as they appear in the bank document
//!
//! These types are deserialize-only. They carry the `correct` flag, so they
//! never go back out over the wire; see [`crate::redact`] for the public shape.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::QuestionDefect;

/// Primary key of a question, unique across the bank
pub type QuestionId = i64;

/// One selectable answer of a question
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Answer {
    /// Key the candidate submits, unique within its question
    pub key: String,
    /// Answer text shown to the candidate
    pub text: String,
    /// Whether this is the correct answer
    pub correct: bool,
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub subject: String,
    pub question_text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Check the structural rules every question in a bank must satisfy:
    /// at least two answers, unique keys and exactly one correct answer.
    pub fn validate(&self) -> Result<(), QuestionDefect> {
        if self.answers.len() < 2 {
            return Err(QuestionDefect::TooFewAnswers(self.answers.len()));
        }

        let mut keys = HashSet::with_capacity(self.answers.len());
        for answer in &self.answers {
            if !keys.insert(answer.key.as_str()) {
                return Err(QuestionDefect::DuplicateAnswerKey(answer.key.clone()));
            }
        }

        let correct = self.answers.iter().filter(|answer| answer.correct).count();
        if correct != 1 {
            return Err(QuestionDefect::CorrectAnswerCount(correct));
        }

        Ok(())
    }
}
