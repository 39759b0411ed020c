//! Question bank store
//!
//! The bank is built once from the source document and never mutated. It
//! keeps the questions in document order plus two indexes over them.

mod source;

use std::collections::{BTreeMap, HashMap};

use crate::error::LoadError;
use crate::question::{Question, QuestionId};

pub use source::{BankSource, load_bank};

/// Options applied while building a bank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail on a repeated question id instead of letting the later entry win
    pub reject_duplicate_ids: bool,
}

/// Immutable, indexed snapshot of every question
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_id: HashMap<QuestionId, usize>,
    by_subject: BTreeMap<String, Vec<usize>>,
}

impl QuestionBank {
    /// Parse and validate a bank document (a JSON array of questions)
    pub fn from_json(document: &str, options: LoadOptions) -> Result<Self, LoadError> {
        let questions: Vec<Question> = serde_json::from_str(document)?;
        Self::from_questions(questions, options)
    }

    /// Validate questions and build the indexes
    ///
    /// A repeated id shadows the earlier entry everywhere, not only in the id
    /// index, so every view of the bank holds each id once.
    pub fn from_questions(questions: Vec<Question>, options: LoadOptions) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::Empty);
        }

        for question in &questions {
            question
                .validate()
                .map_err(|defect| LoadError::InvalidQuestion {
                    id: question.id,
                    defect,
                })?;
        }

        let mut last_position: HashMap<QuestionId, usize> = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if let Some(shadowed) = last_position.insert(question.id, position) {
                if options.reject_duplicate_ids {
                    return Err(LoadError::DuplicateId(question.id));
                }
                tracing::warn!(
                    id = question.id,
                    shadowed,
                    position,
                    "duplicate question id, keeping the later entry"
                );
            }
        }

        let questions: Vec<Question> = questions
            .into_iter()
            .enumerate()
            .filter(|(position, question)| last_position.get(&question.id) == Some(position))
            .map(|(_, question)| question)
            .collect();

        let mut by_id = HashMap::with_capacity(questions.len());
        let mut by_subject: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, question) in questions.iter().enumerate() {
            by_id.insert(question.id, position);
            by_subject
                .entry(question.subject.clone())
                .or_default()
                .push(position);
        }

        tracing::info!(
            questions = questions.len(),
            subjects = by_subject.len(),
            "question bank loaded"
        );

        Ok(Self {
            questions,
            by_id,
            by_subject,
        })
    }

    /// All questions in document order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.by_id.get(&id).map(|&position| &self.questions[position])
    }

    /// Questions of one subject, in document order
    pub fn subject(&self, name: &str) -> Option<SubjectQuestions<'_>> {
        self.by_subject.get(name).map(|positions| SubjectQuestions {
            questions: &self.questions,
            positions,
        })
    }

    /// Subject names in sorted order
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.by_subject.keys().map(String::as_str)
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a loaded bank
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of distinct subjects
    pub fn subject_count(&self) -> usize {
        self.by_subject.len()
    }
}

/// Borrowed view of the questions belonging to one subject
#[derive(Debug, Clone, Copy)]
pub struct SubjectQuestions<'a> {
    questions: &'a [Question],
    positions: &'a [usize],
}

impl<'a> SubjectQuestions<'a> {
    /// Number of questions in the subject (never zero)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The `index`-th question of the subject
    pub fn get(&self, index: usize) -> Option<&'a Question> {
        self.positions
            .get(index)
            .map(|&position| &self.questions[position])
    }

    pub fn iter(self) -> impl Iterator<Item = &'a Question> {
        let questions = self.questions;
        self.positions
            .iter()
            .map(move |&position| &questions[position])
    }
}
