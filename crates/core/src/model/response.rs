use chrono::{DateTime, Utc};

use crate::model::contact::{ContactInfo, ContactInfoError};
use crate::model::group::Persona;
use crate::model::ids::ResponseId;

/// The persisted record of one completed quiz.
///
/// This is the exact shape appended to the response table: identifier,
/// submission time, contact details, and the winning persona label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    response_id: ResponseId,
    submitted_at: DateTime<Utc>,
    name: String,
    email: String,
    persona: Persona,
}

impl SurveyResponse {
    /// Builds a response from already-validated contact info.
    #[must_use]
    pub fn new(
        response_id: ResponseId,
        submitted_at: DateTime<Utc>,
        contact: &ContactInfo,
        persona: Persona,
    ) -> Self {
        Self {
            response_id,
            submitted_at,
            name: contact.name().to_owned(),
            email: contact.email().to_owned(),
            persona,
        }
    }

    /// Rehydrates a response from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `ContactInfoError` if the stored name or email fails
    /// revalidation.
    pub fn from_persisted(
        response_id: ResponseId,
        submitted_at: DateTime<Utc>,
        name: String,
        email: String,
        persona: Persona,
    ) -> Result<Self, ContactInfoError> {
        let contact = ContactInfo::new(name, email)?;
        Ok(Self::new(response_id, submitted_at, &contact, persona))
    }

    #[must_use]
    pub fn response_id(&self) -> ResponseId {
        self.response_id
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn persona(&self) -> Persona {
        self.persona
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn builds_from_contact_info() {
        let contact = ContactInfo::new("Ada", "ada@example.com").unwrap();
        let id = ResponseId::generate();
        let response = SurveyResponse::new(id, fixed_now(), &contact, Persona::Guide);

        assert_eq!(response.response_id(), id);
        assert_eq!(response.submitted_at(), fixed_now());
        assert_eq!(response.name(), "Ada");
        assert_eq!(response.email(), "ada@example.com");
        assert_eq!(response.persona(), Persona::Guide);
    }

    #[test]
    fn from_persisted_revalidates_contact() {
        let err = SurveyResponse::from_persisted(
            ResponseId::generate(),
            fixed_now(),
            "  ".to_owned(),
            "ada@example.com".to_owned(),
            Persona::Visionary,
        )
        .unwrap_err();
        assert_eq!(err, ContactInfoError::EmptyName);
    }
}
