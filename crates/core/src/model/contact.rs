use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContactInfoError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("email cannot be empty")]
    EmptyEmail,
}

/// Validated contact details collected before the result is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    name: String,
    email: String,
}

impl ContactInfo {
    /// Creates validated contact info.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ContactInfoError` if the name or email is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ContactInfoError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactInfoError::EmptyName);
        }

        let email = email.into();
        let email = email.trim();
        if email.is_empty() {
            return Err(ContactInfoError::EmptyEmail);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_valid_input() {
        let contact = ContactInfo::new("  Ada Lovelace  ", " ada@example.com ").unwrap();
        assert_eq!(contact.name(), "Ada Lovelace");
        assert_eq!(contact.email(), "ada@example.com");
    }

    #[test]
    fn rejects_whitespace_only_name() {
        let err = ContactInfo::new("   ", "ada@example.com").unwrap_err();
        assert_eq!(err, ContactInfoError::EmptyName);
    }

    #[test]
    fn rejects_whitespace_only_email() {
        let err = ContactInfo::new("Ada", "\t  ").unwrap_err();
        assert_eq!(err, ContactInfoError::EmptyEmail);
    }
}
