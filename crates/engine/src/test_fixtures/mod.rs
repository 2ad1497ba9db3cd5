//! Shared builders for engine tests.

use chrono::{TimeZone, Utc};
use roster_domain::{
    Birthday, Experience, NewPlayer, PlayerName, PlayerTitle, Profession, Race,
};

use crate::use_cases::management::PlayerPayload;

/// Birthday at noon on 1 July of `year`, far enough from New Year that the
/// local-time year check agrees in every zone.
pub fn birthday_in(year: i32) -> Birthday {
    let instant = Utc
        .with_ymd_and_hms(year, 7, 1, 12, 0, 0)
        .single()
        .expect("valid date");
    Birthday::from_millis(instant.timestamp_millis()).expect("birthday in range")
}

/// A valid, unbanned warrior born in 2010.
pub fn sample_player(name: &str, race: Race, experience: i32) -> NewPlayer {
    NewPlayer::new(
        PlayerName::new(name).expect("valid name"),
        PlayerTitle::new("Wanderer").expect("valid title"),
        race,
        Profession::Warrior,
        birthday_in(2010),
        Experience::new(experience).expect("valid experience"),
    )
}

/// A creation payload with every field present and valid.
pub fn full_payload(name: &str) -> PlayerPayload {
    PlayerPayload {
        name: Some(name.to_string()),
        title: Some("Keeper of Keys".to_string()),
        race: Some(Race::Dwarf),
        profession: Some(Profession::Cleric),
        birthday: Some(birthday_in(2005).as_millis()),
        banned: None,
        experience: Some(1_000),
    }
}
