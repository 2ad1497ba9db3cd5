//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::PlayerRepo;
use crate::use_cases::management::{ManagementUseCases, PlayerCrud};

/// Main application state.
///
/// Holds the use cases built on the record store.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: ManagementUseCases,
}

impl App {
    /// Wire the use cases onto the given store.
    pub fn new(player_repo: Arc<dyn PlayerRepo>) -> Self {
        let use_cases = UseCases {
            management: ManagementUseCases::new(PlayerCrud::new(player_repo)),
        };

        Self { use_cases }
    }
}
