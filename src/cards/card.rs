//! Card identity.
//!
//! A card is either a numbered card (1 through 12) or a wild card. Cards
//! carry no mutable state: the value a wild card stands for is decided
//! when it is placed on a center stack and lives in that stack's entry.

use serde::{Deserialize, Serialize};

/// Lowest numbered rank.
pub const MIN_RANK: u8 = 1;

/// Highest numbered rank; a center stack that reaches it is cleared.
pub const MAX_RANK: u8 = 12;

/// A single Skip-Bo card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    /// Wild card, playable as any rank on a center stack.
    Wild,
    /// Numbered card.
    Number(u8),
}

impl Card {
    /// Create a numbered card, or `None` for a rank outside 1..=12.
    #[must_use]
    pub fn number(rank: u8) -> Option<Self> {
        (MIN_RANK..=MAX_RANK)
            .contains(&rank)
            .then_some(Card::Number(rank))
    }

    #[inline]
    #[must_use]
    pub fn is_wild(self) -> bool {
        matches!(self, Card::Wild)
    }

    /// The printed rank; `None` for a wild card.
    #[inline]
    #[must_use]
    pub fn rank(self) -> Option<u8> {
        match self {
            Card::Number(r) => Some(r),
            Card::Wild => None,
        }
    }

    /// Whether this card can stand for `value` on a center stack.
    #[inline]
    #[must_use]
    pub fn can_play_as(self, value: u8) -> bool {
        match self {
            Card::Wild => (MIN_RANK..=MAX_RANK).contains(&value),
            Card::Number(r) => r == value,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Wild => write!(f, "sb"),
            Card::Number(r) => write!(f, "{r:02}"),
        }
    }
}

/// Build an unshuffled deck: `wild_cards` wilds followed by
/// `copies_per_rank` copies of each rank 1..=12.
#[must_use]
pub fn build_deck(wild_cards: usize, copies_per_rank: usize) -> Vec<Card> {
    let mut deck = Vec::with_capacity(wild_cards + copies_per_rank * MAX_RANK as usize);
    deck.extend(std::iter::repeat(Card::Wild).take(wild_cards));
    for rank in MIN_RANK..=MAX_RANK {
        deck.extend(std::iter::repeat(Card::Number(rank)).take(copies_per_rank));
    }
    deck
}
