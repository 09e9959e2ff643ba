use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// ─── ERRORS ────────────────────────────────────────────────────────────────────

/// Error type for parsing a `SessionId` from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseSessionIdError {
    #[error("session id cannot be empty")]
    Empty,

    #[error("session id contains invalid character {0:?}")]
    InvalidCharacter(char),
}

// ─── SESSION ID ────────────────────────────────────────────────────────────────

/// Unique identifier for a stored quiz session.
///
/// Ids double as file names in the file-backed session store, so the
/// alphabet is restricted to ASCII alphanumerics plus `.`, `_` and `-`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new `SessionId` from a raw string.
    ///
    /// # Errors
    ///
    /// Returns `ParseSessionIdError` if the string is empty or contains a
    /// character outside the id alphabet.
    pub fn new(raw: impl Into<String>) -> Result<Self, ParseSessionIdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ParseSessionIdError::Empty);
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            return Err(ParseSessionIdError::InvalidCharacter(bad));
        }
        Ok(Self(raw))
    }

    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ParseSessionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SessionId {
    type Error = ParseSessionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────
