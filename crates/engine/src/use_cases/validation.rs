//! Field validation for player payloads.
//!
//! Each field has its own check so updates can validate only what was
//! supplied; [`validate_new_player`] is the composite check used on create.

use roster_domain::{
    Birthday, DomainError, Experience, NewPlayer, PlayerId, PlayerName, PlayerTitle,
};

use crate::use_cases::management::PlayerPayload;

/// Validation error type.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Missing { field_name: &'static str },

    #[error("{field_name} is invalid: {reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },

    #[error("Invalid id: {0}")]
    InvalidId(i64),
}

impl ValidationError {
    fn invalid(field_name: &'static str, err: DomainError) -> Self {
        Self::Invalid {
            field_name,
            reason: err.to_string(),
        }
    }
}

/// Ids must be strictly positive.
pub fn validate_player_id(raw: i64) -> Result<PlayerId, ValidationError> {
    PlayerId::new(raw).map_err(|_| ValidationError::InvalidId(raw))
}

/// Validate an optional field is present.
pub fn require_present<T>(value: Option<T>, field_name: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field_name })
}

pub fn validate_name(raw: &str) -> Result<PlayerName, ValidationError> {
    PlayerName::new(raw).map_err(|e| ValidationError::invalid("name", e))
}

pub fn validate_title(raw: &str) -> Result<PlayerTitle, ValidationError> {
    PlayerTitle::new(raw).map_err(|e| ValidationError::invalid("title", e))
}

pub fn validate_birthday(epoch_millis: i64) -> Result<Birthday, ValidationError> {
    Birthday::from_millis(epoch_millis).map_err(|e| ValidationError::invalid("birthday", e))
}

pub fn validate_experience(raw: i32) -> Result<Experience, ValidationError> {
    Experience::new(raw).map_err(|e| ValidationError::invalid("experience", e))
}

/// All six mandatory fields present and valid. `banned` defaults to false.
pub fn validate_new_player(payload: &PlayerPayload) -> Result<NewPlayer, ValidationError> {
    let name = validate_name(require_present(payload.name.as_deref(), "name")?)?;
    let title = validate_title(require_present(payload.title.as_deref(), "title")?)?;
    let race = require_present(payload.race, "race")?;
    let profession = require_present(payload.profession, "profession")?;
    let birthday = validate_birthday(require_present(payload.birthday, "birthday")?)?;
    let experience = validate_experience(require_present(payload.experience, "experience")?)?;

    Ok(
        NewPlayer::new(name, title, race, profession, birthday, experience)
            .with_banned(payload.banned.unwrap_or(false)),
    )
}
