//! Exam payloads returned to the caller

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::QuestionId;
use crate::redact::PublicQuestion;

/// A freshly drawn exam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamStart {
    pub started_at: DateTime<Utc>,
    /// Advisory; submissions after this are still graded
    pub ends_at: DateTime<Utc>,
    pub questions: Vec<PublicQuestion>,
}

/// Score of a submitted exam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamScore {
    pub score: usize,
    pub passed: bool,
    pub required: usize,
    pub total: usize,
}

/// Score plus per-question breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamReview {
    pub score: usize,
    pub passed: bool,
    pub total: usize,
    pub required: usize,
    pub review: Vec<ReviewEntry>,
}

/// One answered question with its key revealed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub id: QuestionId,
    pub question_text: String,
    pub answers: Vec<ReviewAnswer>,
    pub user_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAnswer {
    pub key: String,
    pub text: String,
    pub correct: bool,
    pub selected: bool,
}

impl ExamReview {
    /// The score part of the review
    pub fn summary(&self) -> ExamScore {
        ExamScore {
            score: self.score,
            passed: self.passed,
            required: self.required,
            total: self.total,
        }
    }
}
