//! Predicate composition.
//!
//! Turns a [`PlayerFilter`] into the conjunction of field predicates a record
//! store applies to its scan. Every store evaluates the same
//! [`PlayerPredicate`] values, either natively (SQL) or through
//! [`PlayerPredicate::matches`].

use crate::entities::Player;
use crate::types::{Profession, Race};

use super::params::PlayerFilter;

/// One side or both sides of a numeric range, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound<T> {
    Between(T, T),
    AtLeast(T),
    AtMost(T),
}

impl<T: Copy + PartialOrd> RangeBound<T> {
    pub fn contains(&self, value: T) -> bool {
        match *self {
            RangeBound::Between(min, max) => min <= value && value <= max,
            RangeBound::AtLeast(min) => value >= min,
            RangeBound::AtMost(max) => value <= max,
        }
    }
}

impl<T: Copy + PartialOrd + Default> RangeBound<T> {
    /// Sentinel-zero range where any `min < max` forms a between, even when
    /// `min` is 0.
    ///
    /// `min > max` with both non-zero yields `None`: the filter is dropped
    /// rather than rejected.
    pub fn from_sentinels(min: T, max: T) -> Option<Self> {
        let zero = T::default();
        if min < max {
            Some(RangeBound::Between(min, max))
        } else if min != zero && max == zero {
            Some(RangeBound::AtLeast(min))
        } else if min == zero && max != zero {
            Some(RangeBound::AtMost(max))
        } else {
            None
        }
    }

    /// Sentinel-zero range where a between needs both bounds non-zero and
    /// strictly ordered.
    ///
    /// `min == max` and `min > max` (both non-zero) yield `None`.
    pub fn from_nonzero_sentinels(min: T, max: T) -> Option<Self> {
        let zero = T::default();
        if min != zero && max != zero && min < max {
            Some(RangeBound::Between(min, max))
        } else if min != zero && max == zero {
            Some(RangeBound::AtLeast(min))
        } else if min == zero && max != zero {
            Some(RangeBound::AtMost(max))
        } else {
            None
        }
    }
}

/// A boolean condition over one player field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerPredicate {
    /// Case-insensitive substring; the needle is stored lowercased.
    NameContains(String),
    /// Case-insensitive substring; the needle is stored lowercased.
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    Experience(RangeBound<i32>),
    /// Birthday in epoch millis.
    Birthday(RangeBound<i64>),
    BannedIs(bool),
    Level(RangeBound<i32>),
}

impl PlayerPredicate {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            PlayerPredicate::NameContains(needle) => {
                player.name().as_str().to_lowercase().contains(needle.as_str())
            }
            PlayerPredicate::TitleContains(needle) => {
                player.title().as_str().to_lowercase().contains(needle.as_str())
            }
            PlayerPredicate::RaceIs(race) => player.race() == *race,
            PlayerPredicate::ProfessionIs(profession) => player.profession() == *profession,
            PlayerPredicate::Experience(bound) => bound.contains(player.experience()),
            PlayerPredicate::Birthday(bound) => bound.contains(player.birthday().as_millis()),
            PlayerPredicate::BannedIs(banned) => player.is_banned() == *banned,
            PlayerPredicate::Level(bound) => bound.contains(player.level()),
        }
    }
}

/// Build the ordered predicate set for `filter`.
///
/// Families are emitted in a fixed order: name, title, race, profession,
/// experience, birthday, banned, level. Absent fields and dropped ranges
/// contribute nothing.
pub fn compose_predicates(filter: &PlayerFilter) -> Vec<PlayerPredicate> {
    let mut predicates = Vec::new();

    if let Some(name) = &filter.name {
        predicates.push(PlayerPredicate::NameContains(name.to_lowercase()));
    }
    if let Some(title) = &filter.title {
        predicates.push(PlayerPredicate::TitleContains(title.to_lowercase()));
    }
    if let Some(race) = filter.race {
        predicates.push(PlayerPredicate::RaceIs(race));
    }
    if let Some(profession) = filter.profession {
        predicates.push(PlayerPredicate::ProfessionIs(profession));
    }
    if let Some(bound) = RangeBound::from_sentinels(filter.min_experience, filter.max_experience) {
        predicates.push(PlayerPredicate::Experience(bound));
    }
    if let Some(bound) = RangeBound::from_nonzero_sentinels(filter.after, filter.before) {
        predicates.push(PlayerPredicate::Birthday(bound));
    }
    if let Some(banned) = filter.banned {
        predicates.push(PlayerPredicate::BannedIs(banned));
    }
    if let Some(bound) = RangeBound::from_nonzero_sentinels(filter.min_level, filter.max_level) {
        predicates.push(PlayerPredicate::Level(bound));
    }

    predicates
}
