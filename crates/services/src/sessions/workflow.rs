use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{ContactInfo, Persona, QuestionCatalog, ResponseId, SurveyResponse};
use quiz_core::scoring::score_answers;
use storage::repository::ResponseRepository;

use super::session::{QuizPhase, QuizResult, QuizSession};
use crate::error::SessionError;

/// Result of a successful contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub response_id: ResponseId,
    pub response_row_id: i64,
    pub persona: Persona,
}

/// Orchestrates session start and the score-persist-reveal step.
#[derive(Clone)]
pub struct QuizFlowService {
    clock: Clock,
    responses: Arc<dyn ResponseRepository>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(clock: Clock, responses: Arc<dyn ResponseRepository>) -> Self {
        Self { clock, responses }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(
            clock,
            Arc::new(storage::repository::InMemoryRepository::new()),
        )
    }

    /// Starts a new session over the given catalog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the fresh session cannot be started, which
    /// only happens on a caller bug.
    pub fn start_session(&self, catalog: QuestionCatalog) -> Result<QuizSession, SessionError> {
        let mut session = QuizSession::new(catalog);
        session.start(self.clock.now())?;
        Ok(session)
    }

    /// Validates contact info, scores the answers, persists the response, and
    /// reveals the result.
    ///
    /// On persistence failure the session stays in `AwaitingContact`, so the
    /// same submission can simply be retried.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAwaitingContact` if the quiz is not at the
    /// contact step, `SessionError::Contact` for empty name/email, and
    /// `SessionError::Storage` when the append fails.
    pub async fn submit_contact(
        &self,
        session: &mut QuizSession,
        name: &str,
        email: &str,
    ) -> Result<SubmitOutcome, SessionError> {
        if session.phase() != QuizPhase::AwaitingContact {
            return Err(SessionError::NotAwaitingContact);
        }
        let contact = ContactInfo::new(name, email)?;

        let scorecard = score_answers(session.answers());
        let persona = scorecard.winner().persona();

        let response_id = ResponseId::generate();
        let response =
            SurveyResponse::new(response_id, self.clock.now(), &contact, persona);
        let response_row_id = self.responses.append_response(&response).await?;

        session.mark_result(QuizResult {
            persona,
            response_row_id,
        })?;
        log::info!("stored response {response_id} with result {persona}");

        Ok(SubmitOutcome {
            response_id,
            response_row_id,
            persona,
        })
    }
}
