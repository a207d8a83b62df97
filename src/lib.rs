//! # skipbo-engine
//!
//! A deterministic two-player Skip-Bo engine for self-play and training.
//!
//! ## Design Principles
//!
//! 1. **Seeded**: Every shuffle flows from one `GameRng`. The same seed and
//!    the same moves always reproduce the same game.
//!
//! 2. **Fixed Action Space**: Moves encode to `0..ACTION_SPACE`, so policy
//!    outputs and legal-move masks have a fixed width.
//!
//! 3. **Checked Conservation**: The 234 cards are counted against the
//!    opening census; a broken invariant aborts the game instead of
//!    playing on.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles and move history use `im-rs`,
//!   so cloning a game for search is cheap.
//!
//! - **Effective Values on the Table**: A wild card's played value lives on
//!   the center stack entry, never on the card.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, moves, errors, state, views
//! - `zones`: Piles, hands, the deck and discard pile, center stacks
//! - `cards`: Cards, deck composition, card census
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The Skip-Bo rules

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig, GameError, IllegalReason,
    Move, MoveOutcome, MoveRecord, Source, Destination, ACTION_SPACE,
    GameSnapshot, PlayerView, GameState, GameStatus,
};

pub use crate::zones::{CenterStack, Deck, Hand, Pile, PlacedCard};

pub use crate::cards::{Card, CardCensus};

pub use crate::rules::{RulesEngine, GameResult};

pub use crate::games::skipbo::{SkipBoBuilder, SkipBoGame};
