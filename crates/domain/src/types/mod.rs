//! # Roster Domain Types
//!
//! Shared vocabulary types: pure data, no I/O, serializable.

mod character_class;
pub use character_class::{Profession, Race};
