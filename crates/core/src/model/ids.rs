use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifies one question in the fixed catalog.
///
/// Keys come from a closed set of constants; arbitrary strings cannot become
/// a `QuestionKey`, which keeps answer maps aligned with the catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionKey(&'static str);

impl QuestionKey {
    pub const ENGAGEMENT: Self = Self("engagement");
    pub const MOTIVATION: Self = Self("motivation");
    pub const CONTRIBUTIONS: Self = Self("contributions");
    pub const TECH_LEVEL: Self = Self("tech_level");

    /// Returns the underlying key string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Unique identifier for a persisted survey response.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseId(Uuid);

impl ResponseId {
    /// Mints a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Debug for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionKey({})", self.0)
    }
}

impl fmt::Debug for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResponseId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementation ────────────────────────────────────────────────────

/// Error type for parsing a `ResponseId` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResponseIdError {
    raw: String,
}

impl fmt::Display for ParseResponseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse ResponseId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseResponseIdError {}

impl FromStr for ResponseId {
    type Err = ParseResponseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uuid>()
            .map(ResponseId::from_uuid)
            .map_err(|_| ParseResponseIdError { raw: s.to_owned() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
