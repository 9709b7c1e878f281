use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::ids::QuestionKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("question {0} already has a recorded answer")]
    AlreadyAnswered(QuestionKey),
}

/// The user's recorded choice per question key.
///
/// Entries accumulate as the quiz advances and are never overwritten;
/// dropping the whole set is the only way to clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: BTreeMap<QuestionKey, String>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selected option for a question.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::AlreadyAnswered` if the question already has an
    /// entry.
    pub fn record(
        &mut self,
        key: QuestionKey,
        option: impl Into<String>,
    ) -> Result<(), AnswerError> {
        if self.entries.contains_key(&key) {
            return Err(AnswerError::AlreadyAnswered(key));
        }
        self.entries.insert(key, option.into());
        Ok(())
    }

    /// The recorded option for a question, if any.
    #[must_use]
    pub fn get(&self, key: QuestionKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_get() {
        let mut answers = AnswerSet::new();
        answers
            .record(QuestionKey::ENGAGEMENT, "some option")
            .unwrap();

        assert_eq!(answers.get(QuestionKey::ENGAGEMENT), Some("some option"));
        assert_eq!(answers.get(QuestionKey::MOTIVATION), None);
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn recording_twice_is_rejected() {
        let mut answers = AnswerSet::new();
        answers.record(QuestionKey::ENGAGEMENT, "first").unwrap();
        let err = answers
            .record(QuestionKey::ENGAGEMENT, "second")
            .unwrap_err();

        assert_eq!(err, AnswerError::AlreadyAnswered(QuestionKey::ENGAGEMENT));
        assert_eq!(answers.get(QuestionKey::ENGAGEMENT), Some("first"));
    }

    #[test]
    fn iter_yields_all_entries() {
        let mut answers = AnswerSet::new();
        answers.record(QuestionKey::ENGAGEMENT, "a").unwrap();
        answers.record(QuestionKey::MOTIVATION, "b").unwrap();

        let collected: Vec<_> = answers.iter().collect();
        assert_eq!(collected.len(), 2);
        assert!(collected.contains(&(QuestionKey::ENGAGEMENT, "a")));
        assert!(collected.contains(&(QuestionKey::MOTIVATION, "b")));
    }
}
