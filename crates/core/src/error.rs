use thiserror::Error;

use crate::model::{AnswerError, ContactInfoError, PersonaParseError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Contact(#[from] ContactInfoError),
    #[error(transparent)]
    Persona(#[from] PersonaParseError),
}
