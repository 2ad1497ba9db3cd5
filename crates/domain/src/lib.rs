pub mod entities;
pub mod error;
pub mod filter;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use entities::{NewPlayer, Player};
pub use error::DomainError;
pub use filter::{
    compose_predicates, matches_all, PageRequest, PlayerFilter, PlayerFilterParams, PlayerOrder,
    PlayerPredicate, PlayerQuery, RangeBound, DEFAULT_PAGE_SIZE,
};
pub use ids::PlayerId;
pub use types::{Profession, Race};
pub use value_objects::{
    experience_to_next_level, level, Birthday, Experience, PlayerName, PlayerTitle, Progression,
    MAX_BIRTH_YEAR, MAX_EXPERIENCE, MAX_NAME_LENGTH, MAX_TITLE_LENGTH, MIN_BIRTH_YEAR,
};
