//! Value objects - Immutable objects defined by their attributes

mod birthday;
mod names;
mod progression;

pub use birthday::{Birthday, MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};
pub use names::{PlayerName, PlayerTitle, MAX_NAME_LENGTH, MAX_TITLE_LENGTH};
pub use progression::{experience_to_next_level, level, Experience, Progression, MAX_EXPERIENCE};
