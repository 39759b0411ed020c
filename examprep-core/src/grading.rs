//! Answer key resolution and single-answer grading

use crate::error::GradeError;
use crate::question::Question;

/// Key of the question's correct answer
pub fn correct_key(question: &Question) -> Result<&str, GradeError> {
    question
        .answers
        .iter()
        .find(|answer| answer.correct)
        .map(|answer| answer.key.as_str())
        .ok_or(GradeError::NoCorrectAnswer(question.id))
}

/// Whether `selected` is the correct key
///
/// Exact, case-sensitive comparison without trimming. A question that has no
/// correct answer grades every selection as wrong.
pub fn grade(question: &Question, selected: &str) -> bool {
    correct_key(question).is_ok_and(|key| key == selected)
}

/// Grade a selection that may be missing; a missing selection is wrong
pub fn grade_selection(question: &Question, selected: Option<&str>) -> bool {
    selected.is_some_and(|selected| grade(question, selected))
}
