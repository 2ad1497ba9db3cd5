//! Validated text newtypes for player fields
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty after trimming
//! - Within length limits (counted in Unicode scalar values, after trimming)
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for player names
pub const MAX_NAME_LENGTH: usize = 12;

/// Maximum length for player titles
pub const MAX_TITLE_LENGTH: usize = 30;

fn trimmed_length_within(value: &str, max: usize) -> bool {
    let length = value.trim().chars().count();
    length > 0 && length <= max
}

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player name (non-empty, <=12 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Whether `name` is acceptable: trimmed length in `(0, 12]`.
    pub fn is_valid(name: &str) -> bool {
        trimmed_length_within(name, MAX_NAME_LENGTH)
    }

    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or longer than
    /// 12 characters after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(DomainError::validation(format!(
                "Player name must be 1 to {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(name.trim().to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

// ============================================================================
// PlayerTitle
// ============================================================================

/// A validated player title (non-empty, <=30 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerTitle(String);

impl PlayerTitle {
    /// Whether `title` is acceptable: trimmed length in `(0, 30]`.
    pub fn is_valid(title: &str) -> bool {
        trimmed_length_within(title, MAX_TITLE_LENGTH)
    }

    /// Create a new validated player title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the title is empty or longer than
    /// 30 characters after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if !Self::is_valid(&title) {
            return Err(DomainError::validation(format!(
                "Player title must be 1 to {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        Ok(Self(title.trim().to_string()))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerTitle {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerTitle> for String {
    fn from(title: PlayerTitle) -> String {
        title.0
    }
}
