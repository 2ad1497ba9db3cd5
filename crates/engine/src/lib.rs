//! Roster Engine library.
//!
//! This crate contains all server-side code for the player roster service.
//!
//! ## Structure
//!
//! - `use_cases/` - Player CRUD orchestration and field validation
//! - `infrastructure/` - Record store port, SQLite and in-memory adapters, config
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared builders for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
