use std::sync::Arc;

use quiz_core::model::{Persona, QuestionCatalog, QuestionKey, SurveyResponse};
use quiz_core::time::fixed_now;
use services::{Clock, QuizFlowService, QuizPhase, SessionError};
use storage::repository::{InMemoryRepository, ResponseRepository, ResponseRow, StorageError};

fn answer_with(session: &mut services::QuizSession, key: QuestionKey, option: &str) {
    assert_eq!(session.current_question().unwrap().key(), key);
    session.answer_current(option).unwrap();
}

fn walk_creator_path(session: &mut services::QuizSession) {
    answer_with(
        session,
        QuestionKey::ENGAGEMENT,
        "Creating content, apps or tools",
    );
    answer_with(
        session,
        QuestionKey::MOTIVATION,
        "Recognition as a leader and visibility into upcoming product innovations",
    );
    answer_with(
        session,
        QuestionKey::CONTRIBUTIONS,
        "Sharing insights and driving thought leadership through speaking engagements and content creation",
    );
    answer_with(
        session,
        QuestionKey::TECH_LEVEL,
        "Advanced: I am proficient with multiple programming languages and can architect complex systems independently.",
    );
}

#[tokio::test]
async fn full_walkthrough_persists_the_response() {
    let repo = InMemoryRepository::new();
    let flow = QuizFlowService::new(Clock::fixed(fixed_now()), Arc::new(repo.clone()));

    let mut session = flow.start_session(QuestionCatalog::community()).unwrap();
    assert_eq!(session.phase(), QuizPhase::InProgress);

    walk_creator_path(&mut session);
    assert_eq!(session.phase(), QuizPhase::AwaitingContact);

    let outcome = flow
        .submit_contact(&mut session, "Ada Lovelace", "ada@example.com")
        .await
        .unwrap();

    assert_eq!(outcome.persona, Persona::Visionary);
    assert_eq!(session.phase(), QuizPhase::ResultShown);
    assert_eq!(session.result().unwrap().response_row_id, outcome.response_row_id);

    let stored = repo.get_response(outcome.response_row_id).await.unwrap();
    assert_eq!(stored.response_id(), outcome.response_id);
    assert_eq!(stored.submitted_at(), fixed_now());
    assert_eq!(stored.name(), "Ada Lovelace");
    assert_eq!(stored.email(), "ada@example.com");
    assert_eq!(stored.persona(), Persona::Visionary);
}

#[tokio::test]
async fn whitespace_contact_info_is_rejected_without_persisting() {
    let repo = InMemoryRepository::new();
    let flow = QuizFlowService::new(Clock::fixed(fixed_now()), Arc::new(repo.clone()));

    let mut session = flow.start_session(QuestionCatalog::community()).unwrap();
    walk_creator_path(&mut session);

    let err = flow
        .submit_contact(&mut session, "   ", "ada@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Contact(_)));

    let err = flow
        .submit_contact(&mut session, "Ada", "\t ")
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Contact(_)));

    assert_eq!(session.phase(), QuizPhase::AwaitingContact);
    assert!(repo.list_recent(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn submitting_before_the_contact_step_is_rejected() {
    let flow = QuizFlowService::in_memory(Clock::fixed(fixed_now()));
    let mut session = flow.start_session(QuestionCatalog::community()).unwrap();

    let err = flow
        .submit_contact(&mut session, "Ada", "ada@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::NotAwaitingContact));
    assert_eq!(session.phase(), QuizPhase::InProgress);
}

/// Repository stub whose appends always fail, for the retry path.
#[derive(Clone, Default)]
struct FailingRepository;

#[async_trait::async_trait]
impl ResponseRepository for FailingRepository {
    async fn append_response(&self, _response: &SurveyResponse) -> Result<i64, StorageError> {
        Err(StorageError::Connection("warehouse unavailable".into()))
    }

    async fn get_response(&self, _id: i64) -> Result<SurveyResponse, StorageError> {
        Err(StorageError::NotFound)
    }

    async fn list_recent(&self, _limit: u32) -> Result<Vec<ResponseRow>, StorageError> {
        Err(StorageError::Connection("warehouse unavailable".into()))
    }
}

#[tokio::test]
async fn persistence_failure_keeps_the_session_retriable() {
    let clock = Clock::fixed(fixed_now());
    let failing_flow = QuizFlowService::new(clock, Arc::new(FailingRepository));

    let mut session = failing_flow
        .start_session(QuestionCatalog::community())
        .unwrap();
    walk_creator_path(&mut session);

    let err = failing_flow
        .submit_contact(&mut session, "Ada", "ada@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Storage(_)));
    assert_eq!(session.phase(), QuizPhase::AwaitingContact);
    assert!(session.result().is_none());

    // Retrying the same submission against a healthy sink succeeds.
    let repo = InMemoryRepository::new();
    let healthy_flow = QuizFlowService::new(clock, Arc::new(repo.clone()));
    let outcome = healthy_flow
        .submit_contact(&mut session, "Ada", "ada@example.com")
        .await
        .unwrap();

    assert_eq!(session.phase(), QuizPhase::ResultShown);
    assert_eq!(outcome.persona, Persona::Visionary);
    assert_eq!(repo.list_recent(10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn reset_after_the_result_allows_a_fresh_walkthrough() {
    let flow = QuizFlowService::in_memory(Clock::fixed(fixed_now()));

    let mut session = flow.start_session(QuestionCatalog::community()).unwrap();
    walk_creator_path(&mut session);
    flow.submit_contact(&mut session, "Ada", "ada@example.com")
        .await
        .unwrap();
    assert_eq!(session.phase(), QuizPhase::ResultShown);

    session.reset();
    assert_eq!(session.phase(), QuizPhase::NotStarted);
    assert!(session.answers().is_empty());

    session.start(fixed_now()).unwrap();
    assert_eq!(session.phase(), QuizPhase::InProgress);
    assert_eq!(session.current_index(), 0);
}
