//! Game configuration.
//!
//! The table layout (hand size, stack counts, top rank) is fixed because
//! the move encoding depends on it. Deck composition and reserve size are
//! configurable; the defaults are the standard rules.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::MAX_RANK;

/// Hand slots per player.
pub const HAND_SIZE: usize = 5;

/// Build stacks per player.
pub const BUILD_STACKS: usize = 4;

/// Shared center stacks.
pub const CENTER_STACKS: usize = 4;

/// Cards dealt to each reserve stack under the standard rules.
pub const DEFAULT_RESERVE_SIZE: usize = 30;

/// Wild cards in a standard deck.
pub const DEFAULT_WILD_CARDS: usize = 18;

/// Copies of each rank 1-12 in a standard deck.
pub const DEFAULT_COPIES_PER_RANK: usize = 18;

/// Largest deck a configuration may ask for.
pub const MAX_DECK_SIZE: usize = 4096;

/// Settings fixed at game creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each reserve stack.
    pub reserve_size: usize,

    /// Wild cards in the deck.
    pub wild_cards: usize,

    /// Copies of each rank 1-12 in the deck.
    pub copies_per_rank: usize,

    /// Shuffle seed. `None` draws a fresh seed at creation.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reserve_size: DEFAULT_RESERVE_SIZE,
            wild_cards: DEFAULT_WILD_CARDS,
            copies_per_rank: DEFAULT_COPIES_PER_RANK,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Total number of cards in play. Saturates at `usize::MAX`.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.copies_per_rank
            .saturating_mul(MAX_RANK as usize)
            .saturating_add(self.wild_cards)
    }

    /// Cards dealt before the first move: both reserves and both hands.
    /// Saturates at `usize::MAX`.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.reserve_size.saturating_add(HAND_SIZE).saturating_mul(2)
    }

    /// Check that a game can be dealt with these settings.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.reserve_size == 0 {
            return Err(GameError::InvalidConfig(
                "reserve_size must be at least 1".to_string(),
            ));
        }
        if self.deck_size() == 0 {
            return Err(GameError::InvalidConfig("deck has no cards".to_string()));
        }
        if self.deck_size() > MAX_DECK_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "deck of {} cards exceeds the limit of {MAX_DECK_SIZE}",
                self.deck_size()
            )));
        }
        if self.dealt_cards() > self.deck_size() {
            return Err(GameError::InvalidConfig(format!(
                "deck of {} cards cannot deal {} cards",
                self.deck_size(),
                self.dealt_cards()
            )));
        }
        Ok(())
    }
}
