//! Sort directive for player listings.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::entities::Player;
use crate::error::DomainError;

/// Sort key for player listings. Ordering is always ascending and there is
/// no secondary key: players with equal keys come back in store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub fn all() -> &'static [PlayerOrder] {
        &[
            PlayerOrder::Id,
            PlayerOrder::Name,
            PlayerOrder::Experience,
            PlayerOrder::Birthday,
            PlayerOrder::Level,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "ID",
            PlayerOrder::Name => "NAME",
            PlayerOrder::Experience => "EXPERIENCE",
            PlayerOrder::Birthday => "BIRTHDAY",
            PlayerOrder::Level => "LEVEL",
        }
    }

    /// Ascending comparison of two players on this key only.
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        match self {
            PlayerOrder::Id => a.id().cmp(&b.id()),
            PlayerOrder::Name => a.name().as_str().cmp(b.name().as_str()),
            PlayerOrder::Experience => a.experience().cmp(&b.experience()),
            PlayerOrder::Birthday => a.birthday().cmp(&b.birthday()),
            PlayerOrder::Level => a.level().cmp(&b.level()),
        }
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerOrder::all()
            .iter()
            .copied()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown player order: {}", s)))
    }
}
