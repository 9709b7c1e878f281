mod answers;
mod contact;
mod group;
mod ids;
mod question;
mod response;

pub use answers::{AnswerError, AnswerSet};
pub use contact::{ContactInfo, ContactInfoError};
pub use group::{Cta, Group, Persona, PersonaParseError};
pub use ids::{ParseResponseIdError, QuestionKey, ResponseId};
pub use question::{Question, QuestionCatalog, QuestionError};
pub use response::SurveyResponse;
