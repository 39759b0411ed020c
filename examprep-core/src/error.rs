//! Error types for examprep-core

use std::path::PathBuf;

use thiserror::Error;

use crate::question::QuestionId;

/// Top-level error type for examprep-core
#[derive(Error, Debug)]
pub enum ExamprepError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Exam error: {0}")]
    Exam(#[from] ExamError),

    #[error("Grading error: {0}")]
    Grade(#[from] GradeError),
}

/// Errors while obtaining the raw question bank document
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read question bank file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch question bank from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Question bank request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Errors while building a [`QuestionBank`](crate::QuestionBank)
///
/// Any of these at startup means the process must not serve.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Question bank source error: {0}")]
    Source(#[from] SourceError),

    #[error("Question bank is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Question bank is empty")]
    Empty,

    #[error("Question {id} is invalid: {defect}")]
    InvalidQuestion {
        id: QuestionId,
        #[source]
        defect: QuestionDefect,
    },

    #[error("Duplicate question id: {0}")]
    DuplicateId(QuestionId),
}

/// Structural problems with a single question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionDefect {
    #[error("expected at least 2 answers, found {0}")]
    TooFewAnswers(usize),

    #[error("answer key '{0}' is used more than once")]
    DuplicateAnswerKey(String),

    #[error("expected exactly one correct answer, found {0}")]
    CorrectAnswerCount(usize),
}

/// Errors from lookups and sampling against a loaded bank
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExamError {
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Not enough questions for an exam: {available} available, {required} required")]
    InsufficientData { available: usize, required: usize },
}

/// Errors from resolving a question's answer key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("Question {0} has no correct answer")]
    NoCorrectAnswer(QuestionId),
}
