//! Client-facing question shape
//!
//! Every question that leaves the process goes through [`redact`]. The public
//! types have no `correct` field at all, so nothing serialized from them can
//! reveal the answer key.

use serde::{Deserialize, Serialize};

use crate::question::{Answer, Question, QuestionId};

/// An answer as shown to the candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAnswer {
    pub key: String,
    pub text: String,
}

/// A question as shown to the candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion {
    pub id: QuestionId,
    pub subject: String,
    pub question_text: String,
    pub answers: Vec<PublicAnswer>,
}

/// Copy a question without its correct flags
pub fn redact(question: &Question) -> PublicQuestion {
    PublicQuestion::from(question)
}

impl From<&Answer> for PublicAnswer {
    fn from(answer: &Answer) -> Self {
        Self {
            key: answer.key.clone(),
            text: answer.text.clone(),
        }
    }
}

impl From<&Question> for PublicQuestion {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            subject: question.subject.clone(),
            question_text: question.question_text.clone(),
            answers: question.answers.iter().map(PublicAnswer::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{bank, question};
    use serde_json::Value;

    fn contains_key(value: &Value, name: &str) -> bool {
        match value {
            Value::Object(map) => {
                map.contains_key(name) || map.values().any(|v| contains_key(v, name))
            }
            Value::Array(items) => items.iter().any(|v| contains_key(v, name)),
            _ => false,
        }
    }

    #[test]
    fn keeps_question_fields_and_answer_order() {
        let q = question(7, "Banking", "B");
        let public = redact(&q);

        assert_eq!(public.id, 7);
        assert_eq!(public.subject, "Banking");
        assert_eq!(public.question_text, q.question_text);
        let keys: Vec<&str> = public.answers.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", "C", "D"]);
        assert_eq!(public.answers[1].text, q.answers[1].text);
    }

    #[test]
    fn serialized_form_uses_document_field_names() {
        let json = serde_json::to_value(redact(&question(7, "Banking", "B"))).unwrap();
        assert!(json.get("questionText").is_some());
        assert!(json.get("question_text").is_none());
    }

    #[test]
    fn no_question_in_a_bank_serializes_a_correct_field() {
        let bank = bank(25, &["Banking", "Law"]);
        for q in bank.questions() {
            let json = serde_json::to_value(redact(q)).unwrap();
            assert!(!contains_key(&json, "correct"), "question {} leaked", q.id);
        }
    }
}
