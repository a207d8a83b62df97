//! Card zones.
//!
//! ## Key Types
//!
//! - `Pile`: ordered stack with one open end (reserve, build, draw, discard)
//! - `Hand`: five slots that may hold holes
//! - `CenterStack`: shared stack built 1 to 12, storing each card's value
//! - `Deck`: draw pile plus discard pile, with recycling

pub mod center;
pub mod deck;
pub mod hand;
pub mod pile;

pub use center::{CenterStack, PlacedCard, Placement};
pub use deck::Deck;
pub use hand::Hand;
pub use pile::Pile;
