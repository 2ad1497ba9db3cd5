//! Composed query: predicates + sort directive + page.

use crate::entities::Player;
use crate::error::DomainError;

use super::order::PlayerOrder;
use super::params::PlayerFilter;
use super::predicate::{compose_predicates, PlayerPredicate};

/// Default number of players per page.
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Zero-based page of a sorted result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u32,
    size: u32,
}

impl PageRequest {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `size` is 0.
    pub fn new(number: u32, size: u32) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::validation("Page size must be at least 1"));
        }
        Ok(Self { number, size })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Records to skip before this page starts.
    pub fn offset(&self) -> u64 {
        u64::from(self.number) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Everything a record store needs to answer a list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerQuery {
    pub predicates: Vec<PlayerPredicate>,
    pub order: PlayerOrder,
    pub page: PageRequest,
}

impl PlayerQuery {
    pub fn compose(filter: &PlayerFilter) -> Self {
        Self {
            predicates: compose_predicates(filter),
            order: filter.order,
            page: filter.page,
        }
    }

    /// Whether `player` satisfies every predicate.
    pub fn matches(&self, player: &Player) -> bool {
        matches_all(&self.predicates, player)
    }

    /// Filter, sort (stable) and slice `players` in memory.
    pub fn apply<'a, I>(&self, players: I) -> Vec<Player>
    where
        I: IntoIterator<Item = &'a Player>,
    {
        let mut matching: Vec<&Player> = players
            .into_iter()
            .filter(|player| self.matches(player))
            .collect();
        matching.sort_by(|a, b| self.order.compare(a, b));

        let offset = usize::try_from(self.page.offset()).unwrap_or(usize::MAX);
        matching
            .into_iter()
            .skip(offset)
            .take(self.page.size() as usize)
            .cloned()
            .collect()
    }
}

/// Conjunction of `predicates` against `player`; an empty set matches all.
pub fn matches_all(predicates: &[PlayerPredicate], player: &Player) -> bool {
    predicates.iter().all(|predicate| predicate.matches(player))
}
