//! Candidate answer sheets

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Answers submitted for an exam, keyed by question id
///
/// Deserializes from a JSON object of `"<question id>": "<answer key>"`
/// entries and keeps them in document order. Ids stay unparsed here; the
/// assembler decides which entries count. A value that is not a string
/// (`null`, a number, ...) is kept as a missing selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSubmission {
    entries: Vec<(String, Option<String>)>,
}

impl AnswerSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn insert(&mut self, id: impl Into<String>, selected: Option<&str>) {
        self.entries
            .push((id.into(), selected.map(str::to_string)));
    }

    /// Entries in submission order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(id, selected)| (id.as_str(), selected.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for AnswerSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (id, selected) in iter {
            submission.insert(id, Some(selected.as_ref()));
        }
        submission
    }
}

impl Serialize for AnswerSubmission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, selected) in &self.entries {
            map.serialize_entry(id, selected)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnswerSubmission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SubmissionVisitor)
    }
}

struct SubmissionVisitor;

impl<'de> Visitor<'de> for SubmissionVisitor {
    type Value = AnswerSubmission;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of question ids to answer keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((id, value)) = access.next_entry::<String, Value>()? {
            let selected = match value {
                Value::String(key) => Some(key),
                _ => None,
            };
            entries.push((id, selected));
        }
        Ok(AnswerSubmission { entries })
    }
}
