//! Filter request normalization.
//!
//! [`PlayerFilterParams`] is the raw, all-optional shape decoded from a query
//! string. [`PlayerFilter::from_params`] turns it into the canonical filter
//! the predicate composer works on.
//!
//! Numeric ranges use 0 as "unbounded" on either side. A bound of exactly 0
//! therefore cannot be requested explicitly; `minExperience=0` means the same
//! as leaving it out.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::{Profession, Race};

use super::order::PlayerOrder;
use super::query::PageRequest;

/// Raw list/count parameters as they arrive from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFilterParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub race: Option<Race>,
    #[serde(default)]
    pub profession: Option<Profession>,
    /// Earliest birthday, epoch millis.
    #[serde(default)]
    pub after: Option<i64>,
    /// Latest birthday, epoch millis.
    #[serde(default)]
    pub before: Option<i64>,
    #[serde(default)]
    pub banned: Option<bool>,
    #[serde(default)]
    pub min_experience: Option<i32>,
    #[serde(default)]
    pub max_experience: Option<i32>,
    #[serde(default)]
    pub min_level: Option<i32>,
    #[serde(default)]
    pub max_level: Option<i32>,
    #[serde(default)]
    pub order: Option<PlayerOrder>,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// Canonical filter request. Built per call and passed by reference to the
/// predicate composer; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: i64,
    pub before: i64,
    pub banned: Option<bool>,
    pub min_experience: i32,
    pub max_experience: i32,
    pub min_level: i32,
    pub max_level: i32,
    pub order: PlayerOrder,
    pub page: PageRequest,
}

impl Default for PlayerFilter {
    fn default() -> Self {
        Self {
            name: None,
            title: None,
            race: None,
            profession: None,
            after: 0,
            before: 0,
            banned: None,
            min_experience: 0,
            max_experience: 0,
            min_level: 0,
            max_level: 0,
            order: PlayerOrder::default(),
            page: PageRequest::default(),
        }
    }
}

impl PlayerFilter {
    /// Normalize raw parameters: absent ranges become 0, absent order becomes
    /// `ID`, absent paging becomes the first page of the default size.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a page size of 0.
    pub fn from_params(params: PlayerFilterParams) -> Result<Self, DomainError> {
        let defaults = PageRequest::default();
        let page = PageRequest::new(
            params.page_number.unwrap_or(defaults.number()),
            params.page_size.unwrap_or(defaults.size()),
        )?;

        Ok(Self {
            name: params.name,
            title: params.title,
            race: params.race,
            profession: params.profession,
            after: params.after.unwrap_or(0),
            before: params.before.unwrap_or(0),
            banned: params.banned,
            min_experience: params.min_experience.unwrap_or(0),
            max_experience: params.max_experience.unwrap_or(0),
            min_level: params.min_level.unwrap_or(0),
            max_level: params.max_level.unwrap_or(0),
            order: params.order.unwrap_or_default(),
            page,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    pub fn with_profession(mut self, profession: Profession) -> Self {
        self.profession = Some(profession);
        self
    }

    pub fn with_birthday_range(mut self, after: i64, before: i64) -> Self {
        self.after = after;
        self.before = before;
        self
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = Some(banned);
        self
    }

    pub fn with_experience_range(mut self, min: i32, max: i32) -> Self {
        self.min_experience = min;
        self.max_experience = max;
        self
    }

    pub fn with_level_range(mut self, min: i32, max: i32) -> Self {
        self.min_level = min;
        self.max_level = max;
        self
    }

    pub fn with_order(mut self, order: PlayerOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}
