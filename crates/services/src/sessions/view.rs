use chrono::{DateTime, Utc};
use std::sync::Arc;

use quiz_core::model::{Cta, Persona, SurveyResponse};
use storage::repository::{ResponseRepository, ResponseRow};

use super::session::{QuizPhase, QuizSession};
use crate::error::SessionError;

//
// ─── RENDER DIRECTIVES ─────────────────────────────────────────────────────────
//

/// Heading of the intro screen.
pub const INTRO_TITLE: &str = "What type of Community Contributor are you?";

/// Intro paragraph inviting the user to start.
pub const INTRO_BLURB: &str = "Discover which community groups best align with your strengths \
     and interests. Answer a few fun questions, and learn where you can make the biggest \
     impact. Get ready to explore your potential!";

/// Declarative instruction telling the rendering surface what to show next.
///
/// This is intentionally **not** a UI view-model:
/// - no layout decisions
/// - no pre-formatted strings beyond the static copy
///
/// The surface decides how questions, forms, and results are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDirective {
    ShowIntro {
        title: &'static str,
        blurb: &'static str,
    },
    ShowQuestion {
        number: usize,
        total: usize,
        prompt: String,
        options: Vec<String>,
        image: String,
    },
    ShowContactForm,
    ShowResult {
        label: &'static str,
        description: &'static str,
        message: &'static str,
        image: &'static str,
        ctas: &'static [Cta],
    },
}

/// Projects the session into the directive the surface should render next.
#[must_use]
pub fn render_directive(session: &QuizSession) -> RenderDirective {
    match session.phase() {
        QuizPhase::NotStarted => RenderDirective::ShowIntro {
            title: INTRO_TITLE,
            blurb: INTRO_BLURB,
        },
        QuizPhase::InProgress => match session.current_question() {
            Some(question) => RenderDirective::ShowQuestion {
                number: session.current_index() + 1,
                total: session.catalog().len(),
                prompt: question.prompt().to_owned(),
                options: question.options().to_vec(),
                image: question.image().to_owned(),
            },
            // InProgress guarantees a current question; fall through anyway.
            None => RenderDirective::ShowContactForm,
        },
        QuizPhase::AwaitingContact => RenderDirective::ShowContactForm,
        QuizPhase::ResultShown => {
            let Some(result) = session.result() else {
                // ResultShown guarantees a result; fall back to the form.
                return RenderDirective::ShowContactForm;
            };
            let persona = result.persona;
            RenderDirective::ShowResult {
                label: persona.label(),
                description: persona.description(),
                message: persona.message(),
                image: persona.image_file(),
                ctas: persona.ctas(),
            }
        }
    }
}

//
// ─── RESPONSE HISTORY ──────────────────────────────────────────────────────────
//

/// Presentation-agnostic list item for a persisted response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseListItem {
    pub id: i64,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub persona: Persona,
}

impl ResponseListItem {
    #[must_use]
    pub fn from_row(row: &ResponseRow) -> Self {
        Self {
            id: row.id,
            submitted_at: row.response.submitted_at(),
            name: row.response.name().to_owned(),
            persona: row.response.persona(),
        }
    }
}

/// Read-side facade over the response table that hides repositories from the
/// rendering surface.
#[derive(Clone)]
pub struct ResponseHistoryService {
    responses: Arc<dyn ResponseRepository>,
}

impl ResponseHistoryService {
    #[must_use]
    pub fn new(responses: Arc<dyn ResponseRepository>) -> Self {
        Self { responses }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(storage::repository::InMemoryRepository::new()))
    }

    /// Load the most recent responses, newest first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on repository failures.
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<ResponseListItem>, SessionError> {
        let rows = self.responses.list_recent(limit).await?;
        Ok(rows.iter().map(ResponseListItem::from_row).collect())
    }

    /// Fetch a response by row id.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` when repository access fails.
    pub async fn get_response(&self, id: i64) -> Result<SurveyResponse, SessionError> {
        Ok(self.responses.get_response(id).await?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
