//! Player entity - a game character record managed by the roster

use serde::Serialize;

use crate::ids::PlayerId;
use crate::types::{Profession, Race};
use crate::value_objects::{Birthday, Experience, PlayerName, PlayerTitle, Progression};

/// A player that has passed validation but has no identity yet.
///
/// The record store assigns the id on insert via [`NewPlayer::into_player`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    name: PlayerName,
    title: PlayerTitle,
    race: Race,
    profession: Profession,
    birthday: Birthday,
    banned: bool,
    progression: Progression,
}

impl NewPlayer {
    /// Create a new, unbanned player. Level and until-next-level are derived
    /// from `experience`.
    pub fn new(
        name: PlayerName,
        title: PlayerTitle,
        race: Race,
        profession: Profession,
        birthday: Birthday,
        experience: Experience,
    ) -> Self {
        Self {
            name,
            title,
            race,
            profession,
            birthday,
            banned: false,
            progression: Progression::from_experience(experience),
        }
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn title(&self) -> &PlayerTitle {
        &self.title
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn profession(&self) -> Profession {
        self.profession
    }

    pub fn birthday(&self) -> Birthday {
        self.birthday
    }

    pub fn banned(&self) -> bool {
        self.banned
    }

    pub fn progression(&self) -> Progression {
        self.progression
    }

    /// Attach the store-assigned identity.
    pub fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday,
            banned: self.banned,
            progression: self.progression,
        }
    }
}

/// A stored player.
///
/// `id` is immutable once assigned. Experience, level and until-next-level
/// live together in [`Progression`] and only change through
/// [`Player::set_experience`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: PlayerId,
    name: PlayerName,
    title: PlayerTitle,
    race: Race,
    profession: Profession,
    birthday: Birthday,
    banned: bool,
    #[serde(flatten)]
    progression: Progression,
}

impl Player {
    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn title(&self) -> &PlayerTitle {
        &self.title
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn profession(&self) -> Profession {
        self.profession
    }

    pub fn birthday(&self) -> Birthday {
        self.birthday
    }

    pub fn is_banned(&self) -> bool {
        self.banned
    }

    pub fn progression(&self) -> Progression {
        self.progression
    }

    pub fn experience(&self) -> i32 {
        self.progression.experience()
    }

    pub fn level(&self) -> i32 {
        self.progression.level()
    }

    pub fn until_next_level(&self) -> i32 {
        self.progression.until_next_level()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_name(&mut self, name: PlayerName) {
        self.name = name;
    }

    pub fn set_title(&mut self, title: PlayerTitle) {
        self.title = title;
    }

    pub fn set_race(&mut self, race: Race) {
        self.race = race;
    }

    pub fn set_profession(&mut self, profession: Profession) {
        self.profession = profession;
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = birthday;
    }

    pub fn set_banned(&mut self, banned: bool) {
        self.banned = banned;
    }

    /// Replace experience; level and until-next-level are recomputed with it.
    pub fn set_experience(&mut self, experience: Experience) {
        self.progression = Progression::from_experience(experience);
    }
}
