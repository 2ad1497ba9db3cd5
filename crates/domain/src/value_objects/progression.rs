//! Experience model
//!
//! A player's level and the experience still missing for the next level are
//! pure functions of raw experience:
//!
//! ```text
//! level            = (trunc(sqrt(2500 + 200 * exp)) - 50) / 100
//! until_next_level = 50 * (level + 1) * (level + 2) - exp
//! ```
//!
//! [`Progression`] bundles the three numbers and can only be built from an
//! [`Experience`], so the derived pair never drifts from the raw value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Inclusive upper bound for experience.
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// Level reached with the given experience.
///
/// The square root is truncated before the division, and the division
/// truncates as well. Arithmetic runs in `i64`, so `MAX_EXPERIENCE` cannot
/// overflow the radicand.
pub fn level(experience: i32) -> i32 {
    let radicand = 2500 + 200 * i64::from(experience);
    let root = (radicand as f64).sqrt() as i64;
    ((root - 50) / 100) as i32
}

/// Experience missing until `level + 1`.
///
/// Only meaningful when `level == level(experience)`; for such pairs the
/// result is never negative.
pub fn experience_to_next_level(experience: i32, level: i32) -> i32 {
    let level = i64::from(level);
    (50 * (level + 1) * (level + 2) - i64::from(experience)) as i32
}

/// Validated raw experience in `[0, MAX_EXPERIENCE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Experience(i32);

impl Experience {
    /// Whether `raw` lies in `[0, MAX_EXPERIENCE]`.
    pub fn is_valid(raw: i32) -> bool {
        (0..=MAX_EXPERIENCE).contains(&raw)
    }

    pub fn new(raw: i32) -> Result<Self, DomainError> {
        if !Self::is_valid(raw) {
            return Err(DomainError::validation(format!(
                "Experience must be between 0 and {}, got {}",
                MAX_EXPERIENCE, raw
            )));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Experience {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Experience> for i32 {
    fn from(value: Experience) -> Self {
        value.0
    }
}

/// Experience together with its derived level and until-next-level amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    experience: i32,
    level: i32,
    until_next_level: i32,
}

impl Progression {
    pub fn from_experience(experience: Experience) -> Self {
        let experience = experience.get();
        let level = level(experience);
        Self {
            experience,
            level,
            until_next_level: experience_to_next_level(experience, level),
        }
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn until_next_level(&self) -> i32 {
        self.until_next_level
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::from_experience(Experience(0))
    }
}
