//! Player management operations.

use std::sync::Arc;

use roster_domain::{Player, PlayerFilter, PlayerQuery, Profession, Race};
use serde::Deserialize;

use crate::infrastructure::ports::PlayerRepo;
use crate::use_cases::validation::{
    validate_birthday, validate_experience, validate_name, validate_new_player,
    validate_player_id, validate_title,
};

use super::ManagementError;

/// Create/update body. Every field is optional on the wire; create requires
/// all but `banned`, update applies whichever are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub race: Option<Race>,
    #[serde(default)]
    pub profession: Option<Profession>,
    /// Epoch millis.
    #[serde(default)]
    pub birthday: Option<i64>,
    #[serde(default)]
    pub banned: Option<bool>,
    #[serde(default)]
    pub experience: Option<i32>,
}

pub struct PlayerCrud {
    players: Arc<dyn PlayerRepo>,
}

impl PlayerCrud {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    pub async fn create(&self, payload: PlayerPayload) -> Result<Player, ManagementError> {
        let new_player = validate_new_player(&payload)?;
        let player = self.players.insert(new_player).await?;

        tracing::info!(
            player_id = %player.id(),
            name = %player.name(),
            level = player.level(),
            "Player created"
        );
        Ok(player)
    }

    pub async fn get(&self, raw_id: i64) -> Result<Player, ManagementError> {
        let id = validate_player_id(raw_id)?;
        self.players
            .get(id)
            .await?
            .ok_or(ManagementError::NotFound {
                entity_type: "Player",
                id: id.to_string(),
            })
    }

    /// Overwrite the supplied fields of an existing player. Each supplied
    /// field is validated on its own; a changed experience recomputes level
    /// and until-next-level together.
    pub async fn update(
        &self,
        raw_id: i64,
        payload: PlayerPayload,
    ) -> Result<Player, ManagementError> {
        let mut player = self.get(raw_id).await?;

        if let Some(name) = payload.name.as_deref() {
            player.set_name(validate_name(name)?);
        }
        if let Some(title) = payload.title.as_deref() {
            player.set_title(validate_title(title)?);
        }
        if let Some(race) = payload.race {
            player.set_race(race);
        }
        if let Some(profession) = payload.profession {
            player.set_profession(profession);
        }
        if let Some(birthday) = payload.birthday {
            player.set_birthday(validate_birthday(birthday)?);
        }
        if let Some(banned) = payload.banned {
            player.set_banned(banned);
        }
        if let Some(experience) = payload.experience {
            player.set_experience(validate_experience(experience)?);
        }

        // The record can disappear between the read above and this write.
        if !self.players.save(&player).await? {
            return Err(ManagementError::NotFound {
                entity_type: "Player",
                id: player.id().to_string(),
            });
        }
        tracing::info!(player_id = %player.id(), "Player updated");
        Ok(player)
    }

    /// Deleting an id with no record is reported as not found.
    pub async fn delete(&self, raw_id: i64) -> Result<(), ManagementError> {
        let id = validate_player_id(raw_id)?;
        if !self.players.delete(id).await? {
            return Err(ManagementError::NotFound {
                entity_type: "Player",
                id: id.to_string(),
            });
        }

        tracing::info!(player_id = %id, "Player deleted");
        Ok(())
    }

    /// One page of players matching `filter`, in the requested order.
    pub async fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>, ManagementError> {
        let query = PlayerQuery::compose(filter);
        tracing::debug!(
            predicates = query.predicates.len(),
            order = %query.order,
            page = query.page.number(),
            size = query.page.size(),
            "Listing players"
        );
        Ok(self.players.scan(&query).await?)
    }

    /// Number of players matching `filter`; paging is ignored.
    pub async fn count(&self, filter: &PlayerFilter) -> Result<u64, ManagementError> {
        let query = PlayerQuery::compose(filter);
        Ok(self.players.count_matching(&query.predicates).await?)
    }
}
