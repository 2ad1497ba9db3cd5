//! Management use cases for CRUD-style operations.
//!
//! These use cases keep HTTP handlers thin while coordinating the record store.

use roster_domain::DomainError;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

mod player;

pub use player::{PlayerCrud, PlayerPayload};

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<ValidationError> for ManagementError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<DomainError> for ManagementError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub player: PlayerCrud,
}

impl ManagementUseCases {
    pub fn new(player: PlayerCrud) -> Self {
        Self { player }
    }
}
