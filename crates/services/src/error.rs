//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{AnswerError, ContactInfoError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the quiz session state machine and flow service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz already started")]
    AlreadyStarted,

    #[error("quiz has not been started")]
    NotStarted,

    #[error("no question is awaiting an answer")]
    NotInProgress,

    #[error("option is not offered by the current question: {option:?}")]
    UnknownOption { option: String },

    #[error("quiz is not awaiting contact info")]
    NotAwaitingContact,

    #[error(transparent)]
    Answer(#[from] AnswerError),

    #[error(transparent)]
    Contact(#[from] ContactInfoError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
