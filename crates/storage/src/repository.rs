use async_trait::async_trait;
use quiz_core::model::SurveyResponse;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A persisted response together with its storage row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRow {
    pub id: i64,
    pub response: SurveyResponse,
}

impl ResponseRow {
    #[must_use]
    pub fn new(id: i64, response: SurveyResponse) -> Self {
        Self { id, response }
    }
}

/// Repository contract for the response table.
///
/// The quiz core treats this as "append one record, may fail"; the query
/// methods exist for the history view and for tests.
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Append one response and return its row id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the response id already exists,
    /// or other storage errors.
    async fn append_response(&self, response: &SurveyResponse) -> Result<i64, StorageError>;

    /// Fetch a response by row id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_response(&self, id: i64) -> Result<SurveyResponse, StorageError>;

    /// List the most recent responses, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on repository failures.
    async fn list_recent(&self, limit: u32) -> Result<Vec<ResponseRow>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    responses: Arc<Mutex<Vec<SurveyResponse>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ResponseRepository for InMemoryRepository {
    async fn append_response(&self, response: &SurveyResponse) -> Result<i64, StorageError> {
        let mut guard = self
            .responses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard
            .iter()
            .any(|r| r.response_id() == response.response_id())
        {
            return Err(StorageError::Conflict);
        }
        guard.push(response.clone());
        i64::try_from(guard.len())
            .map_err(|_| StorageError::Serialization("row id overflow".into()))
    }

    async fn get_response(&self, id: i64) -> Result<SurveyResponse, StorageError> {
        let guard = self
            .responses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let index = usize::try_from(id.checked_sub(1).ok_or(StorageError::NotFound)?)
            .map_err(|_| StorageError::NotFound)?;
        guard.get(index).cloned().ok_or(StorageError::NotFound)
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<ResponseRow>, StorageError> {
        let guard = self
            .responses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let mut out = Vec::new();
        for (index, response) in guard.iter().enumerate().rev().take(limit) {
            let id = i64::try_from(index + 1)
                .map_err(|_| StorageError::Serialization("row id overflow".into()))?;
            out.push(ResponseRow::new(id, response.clone()));
        }
        Ok(out)
    }
}

/// Aggregates the response repository behind a trait object for backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub responses: Arc<dyn ResponseRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            responses: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{ContactInfo, Persona, ResponseId, SurveyResponse};
    use quiz_core::time::fixed_now;

    fn build_response(name: &str, persona: Persona) -> SurveyResponse {
        let contact = ContactInfo::new(name, format!("{name}@example.com")).unwrap();
        SurveyResponse::new(ResponseId::generate(), fixed_now(), &contact, persona)
    }

    #[tokio::test]
    async fn append_then_get_roundtrips() {
        let repo = InMemoryRepository::new();
        let response = build_response("ada", Persona::Visionary);

        let id = repo.append_response(&response).await.unwrap();
        let fetched = repo.get_response(id).await.unwrap();

        assert_eq!(fetched, response);
    }

    #[tokio::test]
    async fn duplicate_response_id_conflicts() {
        let repo = InMemoryRepository::new();
        let response = build_response("ada", Persona::Guide);

        repo.append_response(&response).await.unwrap();
        let err = repo.append_response(&response).await.unwrap_err();

        assert!(matches!(err, StorageError::Conflict));
    }

    #[tokio::test]
    async fn list_recent_is_newest_first_and_bounded() {
        let repo = InMemoryRepository::new();
        for name in ["first", "second", "third"] {
            repo.append_response(&build_response(name, Persona::Gatherer))
                .await
                .unwrap();
        }

        let rows = repo.list_recent(2).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].response.name(), "third");
        assert_eq!(rows[1].response.name(), "second");
    }

    #[tokio::test]
    async fn get_missing_row_is_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo.get_response(7).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
