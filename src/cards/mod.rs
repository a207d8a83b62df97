//! Card model: identity, deck composition, and census.
//!
//! ## Key Types
//!
//! - `Card`: a numbered card (1-12) or a wild card
//! - `CardCensus`: multiset of cards, used for conservation checks

pub mod card;
pub mod census;

pub use card::{build_deck, Card, MAX_RANK, MIN_RANK};
pub use census::CardCensus;
