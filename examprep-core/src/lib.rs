//! examprep-core: exam practice engine
//!
//! This crate holds everything that decides what a candidate sees and how
//! their answers are scored:
//!
//! - **Question bank** - [`QuestionBank`] validates the source document once and
//!   indexes it by id and by subject
//! - **Bank sources** - [`BankSource`] reads the document from disk or fetches it
//!   over HTTP
//! - **Redaction** - [`redact`] turns a [`Question`] into a [`PublicQuestion`]
//!   without the correct flags
//! - **Sampling** - [`pick_one`] and [`pick_exam_set`] behind the [`Sampler`] trait
//! - **Grading** - [`correct_key`] and [`grade`]
//! - **Exams** - [`ExamAssembler`] starts, scores and reviews mock exams
//!
//! # Quick Start
//!
//! ```no_run
//! use chrono::Utc;
//! use examprep_core::{ExamAssembler, ExamFormat, LoadOptions, QuestionBank, ThreadRngSampler};
//!
//! fn example(document: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let bank = QuestionBank::from_json(document, LoadOptions::default())?;
//!     let exam = ExamAssembler::new(&bank, ExamFormat::STANDARD);
//!
//!     let started = exam.start(&ThreadRngSampler, Utc::now())?;
//!     println!("{} questions until {}", started.questions.len(), started.ends_at);
//!     Ok(())
//! }
//! ```
//!
//! The bank is immutable after construction, so a single instance can be
//! shared between any number of concurrent requests behind an `Arc`.

pub mod bank;
pub mod error;
pub mod exam;
pub mod grading;
pub mod question;
pub mod redact;
pub mod sampling;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use bank::{BankSource, LoadOptions, QuestionBank, SubjectQuestions, load_bank};
pub use error::{ExamError, ExamprepError, GradeError, LoadError, QuestionDefect, SourceError};
pub use exam::{
    AnswerSubmission, ExamAssembler, ExamFormat, ExamReview, ExamScore, ExamStart, ReviewAnswer,
    ReviewEntry,
};
pub use grading::{correct_key, grade, grade_selection};
pub use question::{Answer, Question, QuestionId};
pub use redact::{PublicAnswer, PublicQuestion, redact};
pub use sampling::{Sampler, StdRngSampler, ThreadRngSampler, pick_exam_set, pick_one};
