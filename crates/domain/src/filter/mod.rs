//! Query-filter engine for player listings.
//!
//! Flow: [`PlayerFilterParams`] (raw) → [`PlayerFilter`] (normalized) →
//! [`PlayerQuery`] (predicates, sort directive, page) → record store.

mod order;
mod params;
mod predicate;
mod query;

pub use order::PlayerOrder;
pub use params::{PlayerFilter, PlayerFilterParams};
pub use predicate::{compose_predicates, PlayerPredicate, RangeBound};
pub use query::{matches_all, PageRequest, PlayerQuery, DEFAULT_PAGE_SIZE};
