//! Repository port traits for database access.

use async_trait::async_trait;
use roster_domain::{NewPlayer, Player, PlayerId, PlayerPredicate, PlayerQuery};

use super::error::RepoError;

// =============================================================================
// Player Storage
// =============================================================================

/// Durable record store for players.
///
/// Single-record writes are atomic and scans see a consistent snapshot;
/// callers add no transaction scope on top.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Store a new player and return it with its assigned id.
    async fn insert(&self, player: NewPlayer) -> Result<Player, RepoError>;
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;
    /// Overwrite an existing player. Returns whether a record was updated.
    async fn save(&self, player: &Player) -> Result<bool, RepoError>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: PlayerId) -> Result<bool, RepoError>;

    // Queries
    /// One page of matching players, sorted by `query.order`.
    async fn scan(&self, query: &PlayerQuery) -> Result<Vec<Player>, RepoError>;
    /// Total number of players matching `predicates`, ignoring paging.
    async fn count_matching(&self, predicates: &[PlayerPredicate]) -> Result<u64, RepoError>;
}
