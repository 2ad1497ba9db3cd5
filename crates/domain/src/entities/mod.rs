//! Domain entities

mod player;

pub use player::{NewPlayer, Player};
