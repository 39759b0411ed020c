//! Mock exam assembly, scoring and review
//!
//! Exams are stateless on the server: [`ExamAssembler::start`] hands out a
//! redacted question set and forgets it, and [`ExamAssembler::submit`] /
//! [`ExamAssembler::review`] score whatever answer sheet comes back against
//! the bank alone.

mod submission;
mod types;

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::bank::QuestionBank;
use crate::error::ExamError;
use crate::grading::{correct_key, grade_selection};
use crate::question::{Question, QuestionId};
use crate::redact::redact;
use crate::sampling::{Sampler, pick_exam_set};

pub use submission::AnswerSubmission;
pub use types::{ExamReview, ExamScore, ExamStart, ReviewAnswer, ReviewEntry};

/// Size, pass mark and time limit of a mock exam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamFormat {
    /// Questions drawn per exam
    pub question_count: usize,
    /// Minimum score to pass
    pub pass_mark: usize,
    /// Time limit in minutes
    pub duration_minutes: i64,
}

impl ExamFormat {
    /// 60 questions, 45 to pass (75%), 60 minutes
    pub const STANDARD: Self = Self {
        question_count: 60,
        pass_mark: 45,
        duration_minutes: 60,
    };

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes)
    }

    pub fn passed(&self, score: usize) -> bool {
        score >= self.pass_mark
    }

    fn score(&self, score: usize) -> ExamScore {
        ExamScore {
            score,
            passed: self.passed(score),
            required: self.pass_mark,
            total: self.question_count,
        }
    }
}

impl Default for ExamFormat {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Runs exam operations against one bank
#[derive(Debug, Clone, Copy)]
pub struct ExamAssembler<'a> {
    bank: &'a QuestionBank,
    format: ExamFormat,
}

impl<'a> ExamAssembler<'a> {
    pub fn new(bank: &'a QuestionBank, format: ExamFormat) -> Self {
        Self { bank, format }
    }

    pub fn format(&self) -> ExamFormat {
        self.format
    }

    /// Draw a new exam starting at `now`
    pub fn start(&self, sampler: &dyn Sampler, now: DateTime<Utc>) -> Result<ExamStart, ExamError> {
        let questions = pick_exam_set(self.bank, self.format.question_count, sampler)?;
        tracing::debug!(questions = questions.len(), "exam drawn");

        Ok(ExamStart {
            started_at: now,
            ends_at: now + self.format.duration(),
            questions: questions.into_iter().map(redact).collect(),
        })
    }

    /// Score an answer sheet
    pub fn submit(&self, submission: &AnswerSubmission) -> ExamScore {
        let score = self
            .answered(submission)
            .into_iter()
            .filter(|(question, selected)| grade_selection(question, *selected))
            .count();
        self.format.score(score)
    }

    /// Score an answer sheet and reveal the key of every answered question
    pub fn review(&self, submission: &AnswerSubmission) -> ExamReview {
        let review: Vec<ReviewEntry> = self
            .answered(submission)
            .into_iter()
            .map(|(question, selected)| review_entry(question, selected))
            .collect();
        let score = review.iter().filter(|entry| entry.user_correct).count();
        let summary = self.format.score(score);

        ExamReview {
            score: summary.score,
            passed: summary.passed,
            total: summary.total,
            required: summary.required,
            review,
        }
    }

    /// Resolve submission entries to bank questions, in submission order
    ///
    /// Entries whose id does not parse or is not in the bank are dropped. When
    /// two entries name the same question the later selection replaces the
    /// earlier one in place.
    fn answered<'s>(
        &self,
        submission: &'s AnswerSubmission,
    ) -> Vec<(&'a Question, Option<&'s str>)> {
        let mut answered: Vec<(&'a Question, Option<&'s str>)> = Vec::with_capacity(submission.len());
        let mut positions: HashMap<QuestionId, usize> = HashMap::with_capacity(submission.len());

        for (raw_id, selected) in submission.iter() {
            let Ok(id) = raw_id.trim().parse::<QuestionId>() else {
                tracing::debug!(id = raw_id, "skipping submission entry with non-numeric id");
                continue;
            };
            let Some(question) = self.bank.get(id) else {
                tracing::debug!(id, "skipping submission entry for unknown question");
                continue;
            };

            match positions.get(&id) {
                Some(&position) => answered[position].1 = selected,
                None => {
                    positions.insert(id, answered.len());
                    answered.push((question, selected));
                }
            }
        }

        answered
    }
}

fn review_entry(question: &Question, selected: Option<&str>) -> ReviewEntry {
    let key = correct_key(question).ok();

    ReviewEntry {
        id: question.id,
        question_text: question.question_text.clone(),
        answers: question
            .answers
            .iter()
            .map(|answer| ReviewAnswer {
                key: answer.key.clone(),
                text: answer.text.clone(),
                correct: key == Some(answer.key.as_str()),
                selected: selected == Some(answer.key.as_str()),
            })
            .collect(),
        user_correct: grade_selection(question, selected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Answer;
    use crate::sampling::{StdRngSampler, ThreadRngSampler};
    use crate::testing::{bank, fixture_correct_key, fixture_wrong_key};
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn banking_bank() -> QuestionBank {
        let question = Question {
            id: 7,
            subject: "Banking".to_string(),
            question_text: "Which one?".to_string(),
            answers: vec![
                Answer {
                    key: "A".to_string(),
                    text: "x".to_string(),
                    correct: false,
                },
                Answer {
                    key: "B".to_string(),
                    text: "y".to_string(),
                    correct: true,
                },
            ],
        };
        QuestionBank::from_questions(vec![question], Default::default()).unwrap()
    }

    fn submission(entries: &[(&str, Option<&str>)]) -> AnswerSubmission {
        let mut submission = AnswerSubmission::new();
        for (id, selected) in entries {
            submission.insert(*id, *selected);
        }
        submission
    }

    #[test]
    fn standard_format_constants() {
        let format = ExamFormat::default();
        assert_eq!(format.question_count, 60);
        assert_eq!(format.pass_mark, 45);
        assert_eq!(format.duration(), Duration::minutes(60));
        assert!(format.passed(45));
        assert!(!format.passed(44));
    }

    #[test]
    fn start_draws_sixty_redacted_questions_with_time_window() {
        let bank = bank(90, &["Banking", "Law", "Insurance"]);
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

        let started = exam.start(&ThreadRngSampler, now).unwrap();

        assert_eq!(started.started_at, now);
        assert_eq!(started.ends_at, Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap());
        assert_eq!(started.questions.len(), 60);
        let ids: HashSet<QuestionId> = started.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 60);

        let json = serde_json::to_string(&started).unwrap();
        assert!(!json.contains("\"correct\""));
        assert!(json.contains("\"startedAt\""));
        assert!(json.contains("\"endsAt\""));
    }

    #[test]
    fn start_with_small_bank_is_insufficient_data() {
        let bank = bank(10, &["Banking"]);
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let err = exam.start(&ThreadRngSampler, Utc::now()).unwrap_err();
        assert_eq!(
            err,
            ExamError::InsufficientData {
                available: 10,
                required: 60
            }
        );
    }

    #[test]
    fn submit_empty_scores_zero_and_fails() {
        let bank = bank(60, &["Banking"]);
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let score = exam.submit(&AnswerSubmission::new());
        assert_eq!(
            score,
            ExamScore {
                score: 0,
                passed: false,
                required: 45,
                total: 60
            }
        );
    }

    #[test]
    fn submit_skips_unknown_ids() {
        let bank = banking_bank();
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let score = exam.submit(&submission(&[("7", Some("B")), ("9999", Some("A"))]));
        assert_eq!(score.score, 1);
        assert!(!score.passed);
    }

    #[test]
    fn submit_skips_non_numeric_ids() {
        let bank = banking_bank();
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let score = exam.submit(&submission(&[("seven", Some("B")), ("", Some("B"))]));
        assert_eq!(score.score, 0);
    }

    #[test]
    fn submit_grades_missing_selection_as_wrong() {
        let bank = banking_bank();
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        assert_eq!(exam.submit(&submission(&[("7", None)])).score, 0);
    }

    #[test]
    fn submit_counts_a_repeated_question_once_with_latest_selection() {
        let bank = banking_bank();
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        assert_eq!(exam.submit(&submission(&[("7", Some("B")), ("07", Some("B"))])).score, 1);
        assert_eq!(exam.submit(&submission(&[("7", Some("B")), ("7", Some("A"))])).score, 0);
        assert_eq!(exam.submit(&submission(&[("7", Some("A")), ("7", Some("B"))])).score, 1);
    }

    #[test]
    fn submit_passes_at_pass_mark() {
        let bank = bank(60, &["Banking", "Law"]);
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let sheet = |correct: i64| {
            let mut sheet = AnswerSubmission::new();
            for id in 1..=60 {
                let key = if id <= correct {
                    fixture_correct_key(id)
                } else {
                    fixture_wrong_key(id)
                };
                sheet.insert(id.to_string(), Some(key));
            }
            sheet
        };

        let at_mark = exam.submit(&sheet(45));
        assert_eq!(at_mark.score, 45);
        assert!(at_mark.passed);

        let below = exam.submit(&sheet(44));
        assert_eq!(below.score, 44);
        assert!(!below.passed);
    }

    #[test]
    fn submitted_exam_scores_reproducibly() {
        let bank = bank(100, &["Banking", "Law"]);
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);
        let started = exam.start(&StdRngSampler::with_seed(3), Utc::now()).unwrap();

        let sheet: AnswerSubmission = started
            .questions
            .iter()
            .map(|q| (q.id.to_string(), fixture_correct_key(q.id)))
            .collect();

        let first = exam.submit(&sheet);
        assert_eq!(first.score, 60);
        assert!(first.passed);
        assert_eq!(exam.submit(&sheet), first);
        assert_eq!(exam.review(&sheet).summary(), first);
    }

    #[test]
    fn review_reveals_key_and_selection() {
        let bank = banking_bank();
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let review = exam.review(&submission(&[("7", Some("B"))]));
        assert_eq!(review.score, 1);
        assert_eq!(review.total, 60);
        assert_eq!(review.required, 45);
        assert_eq!(review.review.len(), 1);

        let entry = &review.review[0];
        assert_eq!(entry.id, 7);
        assert_eq!(entry.question_text, "Which one?");
        assert!(entry.user_correct);
        assert_eq!(
            entry.answers,
            vec![
                ReviewAnswer {
                    key: "A".to_string(),
                    text: "x".to_string(),
                    correct: false,
                    selected: false,
                },
                ReviewAnswer {
                    key: "B".to_string(),
                    text: "y".to_string(),
                    correct: true,
                    selected: true,
                },
            ]
        );
    }

    #[test]
    fn review_of_wrong_answer_marks_selection() {
        let bank = banking_bank();
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let review = exam.review(&submission(&[("7", Some("A"))]));
        let entry = &review.review[0];
        assert!(!entry.user_correct);
        assert!(entry.answers[0].selected);
        assert!(!entry.answers[0].correct);
        assert!(entry.answers[1].correct);
        assert!(!entry.answers[1].selected);
    }

    #[test]
    fn review_follows_submission_order_and_skips_unknown() {
        let bank = bank(20, &["Banking", "Law"]);
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let review = exam.review(&submission(&[
            ("15", Some(fixture_correct_key(15))),
            ("404", Some("A")),
            ("3", None),
            ("9", Some(fixture_wrong_key(9))),
        ]));

        let ids: Vec<QuestionId> = review.review.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![15, 3, 9]);
        assert_eq!(review.score, 1);
        assert!(review.review[1].answers.iter().all(|a| !a.selected));
    }

    #[test]
    fn review_serializes_camel_case_fields() {
        let bank = banking_bank();
        let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);

        let json = serde_json::to_value(exam.review(&submission(&[("7", Some("B"))]))).unwrap();
        assert_eq!(json["review"][0]["userCorrect"], true);
        assert_eq!(json["review"][0]["questionText"], "Which one?");
        assert_eq!(json["review"][0]["answers"][1]["correct"], true);
    }
}
