use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{AnswerSet, Persona, Question, QuestionCatalog};

use super::progress::QuizProgress;
use crate::error::SessionError;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Where one quiz walkthrough currently stands.
///
/// Transitions only move forward: `NotStarted → InProgress → AwaitingContact
/// → ResultShown`. `reset` is the single way back to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    AwaitingContact,
    ResultShown,
}

/// Outcome pinned to the session once the result has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub persona: Persona,
    pub response_row_id: i64,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Per-session quiz state: the question cursor, the collected answers, and
/// the start/result markers.
///
/// The session is an explicit value owned by the caller and threaded through
/// the request/response cycle; nothing here is process-wide.
pub struct QuizSession {
    catalog: QuestionCatalog,
    current: usize,
    answers: AnswerSet,
    started_at: Option<DateTime<Utc>>,
    result: Option<QuizResult>,
}

impl QuizSession {
    /// Creates a fresh, not-yet-started session over the given catalog.
    #[must_use]
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog,
            current: 0,
            answers: AnswerSet::new(),
            started_at: None,
            result: None,
        }
    }

    /// Convenience constructor over the built-in community questionnaire.
    #[must_use]
    pub fn community() -> Self {
        Self::new(QuestionCatalog::community())
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.started_at.is_none() {
            QuizPhase::NotStarted
        } else if self.result.is_some() {
            QuizPhase::ResultShown
        } else if self.current < self.catalog.len() {
            QuizPhase::InProgress
        } else {
            QuizPhase::AwaitingContact
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.result
    }

    /// Zero-based index of the next unanswered question.
    ///
    /// Equals the catalog length once every question has been answered.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question currently awaiting an answer, if the quiz is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase() == QuizPhase::InProgress {
            self.catalog.get(self.current)
        } else {
            None
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.catalog.len(),
            answered: self.answers.len(),
            remaining: self.catalog.len().saturating_sub(self.current),
            is_complete: self.current >= self.catalog.len(),
        }
    }

    /// Begins the quiz at the first question.
    ///
    /// `started_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` if the quiz was started before.
    pub fn start(&mut self, started_at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.started_at.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        self.started_at = Some(started_at);
        Ok(())
    }

    /// Records the selected option for the current question and advances.
    ///
    /// Reaching the end of the catalog implicitly moves the session into
    /// `AwaitingContact`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` when no question is awaiting an
    /// answer and `SessionError::UnknownOption` when the option is not one
    /// the current question offers.
    pub fn answer_current(&mut self, option: &str) -> Result<(), SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::NotInProgress);
        };
        if !question.has_option(option) {
            return Err(SessionError::UnknownOption {
                option: option.to_owned(),
            });
        }

        let key = question.key();
        self.answers.record(key, option)?;
        self.current += 1;
        Ok(())
    }

    /// Discards all accumulated state and returns to `NotStarted`.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers = AnswerSet::new();
        self.started_at = None;
        self.result = None;
    }

    pub(crate) fn mark_result(&mut self, result: QuizResult) -> Result<(), SessionError> {
        if self.phase() != QuizPhase::AwaitingContact {
            return Err(SessionError::NotAwaitingContact);
        }
        self.result = Some(result);
        Ok(())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase())
            .field("current", &self.current)
            .field("answered", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
