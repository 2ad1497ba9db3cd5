//! In-memory player storage.
//!
//! Used for tests and for ephemeral runs (`PLAYER_STORE=memory`). Predicates
//! and ordering are evaluated through the domain's own definitions, so the
//! results match what the SQLite store returns for the same query.

use std::collections::BTreeMap;

use async_trait::async_trait;
use roster_domain::{matches_all, NewPlayer, Player, PlayerId, PlayerPredicate, PlayerQuery};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PlayerRepo, RepoError};

#[derive(Default)]
struct State {
    last_id: i64,
    players: BTreeMap<PlayerId, Player>,
}

/// Player store backed by a `BTreeMap` keyed by id.
#[derive(Default)]
pub struct InMemoryPlayerRepo {
    state: RwLock<State>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn insert(&self, player: NewPlayer) -> Result<Player, RepoError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = PlayerId::new(state.last_id)
            .map_err(|e| RepoError::database("players.insert", e))?;
        let player = player.into_player(id);
        state.players.insert(id, player.clone());
        Ok(player)
    }

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.state.read().await.players.get(&id).cloned())
    }

    async fn save(&self, player: &Player) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        match state.players.get_mut(&player.id()) {
            Some(stored) => {
                *stored = player.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: PlayerId) -> Result<bool, RepoError> {
        Ok(self.state.write().await.players.remove(&id).is_some())
    }

    async fn scan(&self, query: &PlayerQuery) -> Result<Vec<Player>, RepoError> {
        let state = self.state.read().await;
        Ok(query.apply(state.players.values()))
    }

    async fn count_matching(&self, predicates: &[PlayerPredicate]) -> Result<u64, RepoError> {
        let state = self.state.read().await;
        let count = state
            .players
            .values()
            .filter(|player| matches_all(predicates, player))
            .count();
        Ok(count as u64)
    }
}
