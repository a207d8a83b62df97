//! Move representation: where a card comes from and where it goes.
//!
//! Every move takes the top card of one of the acting player's zones and
//! places it on a center stack or on one of that player's build stacks.
//! Moves have a dense integer encoding so agents can use a fixed-size
//! action space:
//!
//! - sources: 0 = reserve, 1-5 = hand slots, 6-9 = build stacks
//! - destinations: 0-3 = center stacks, 4-7 = build stacks
//! - `index = 8 * source + destination`, giving 80 actions
//!
//! ```
//! use skipbo_engine::core::{Destination, Move, Source};
//!
//! let mv = Move::new(Source::Hand(2), Destination::Center(1));
//! assert_eq!(mv.index(), 8 * 3 + 1);
//! assert_eq!(Move::from_index(mv.index()), Some(mv));
//! ```

use serde::{Deserialize, Serialize};

use super::config::{BUILD_STACKS, CENTER_STACKS, HAND_SIZE};
use super::player::PlayerId;
use crate::cards::Card;

/// Number of source positions in the encoding.
pub const SOURCE_COUNT: usize = 1 + HAND_SIZE + BUILD_STACKS;

/// Number of destination positions in the encoding.
pub const DESTINATION_COUNT: usize = CENTER_STACKS + BUILD_STACKS;

/// Size of the encoded action space.
pub const ACTION_SPACE: usize = SOURCE_COUNT * DESTINATION_COUNT;

/// A zone of the acting player that a card can be taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Top of the reserve stack.
    Reserve,
    /// A hand slot (0-based).
    Hand(usize),
    /// Top of a build stack (0-based).
    Build(usize),
}

impl Source {
    /// Encoded position, or `None` when the slot index is out of range.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Source::Reserve => Some(0),
            Source::Hand(slot) if slot < HAND_SIZE => Some(1 + slot),
            Source::Build(stack) if stack < BUILD_STACKS => Some(1 + HAND_SIZE + stack),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Source::Reserve),
            i if i <= HAND_SIZE => Some(Source::Hand(i - 1)),
            i if i < SOURCE_COUNT => Some(Source::Build(i - 1 - HAND_SIZE)),
            _ => None,
        }
    }

    /// All in-range sources in encoding order.
    pub fn all() -> impl Iterator<Item = Source> {
        (0..SOURCE_COUNT).filter_map(Source::from_index)
    }
}

/// Where a card can be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// One of the shared center stacks (0-based).
    Center(usize),
    /// One of the acting player's build stacks (0-based).
    Build(usize),
}

impl Destination {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Destination::Center(stack) if stack < CENTER_STACKS => Some(stack),
            Destination::Build(stack) if stack < BUILD_STACKS => Some(CENTER_STACKS + stack),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            i if i < CENTER_STACKS => Some(Destination::Center(i)),
            i if i < DESTINATION_COUNT => Some(Destination::Build(i - CENTER_STACKS)),
            _ => None,
        }
    }

    /// Whether placing here ends the turn.
    #[must_use]
    pub fn ends_turn(self) -> bool {
        matches!(self, Destination::Build(_))
    }

    pub fn all() -> impl Iterator<Item = Destination> {
        (0..DESTINATION_COUNT).filter_map(Destination::from_index)
    }
}

/// A (source, destination) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: Source,
    pub destination: Destination,
}

impl Move {
    #[must_use]
    pub const fn new(source: Source, destination: Destination) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Whether both ends name a position that exists.
    #[must_use]
    pub fn in_range(self) -> bool {
        self.source.index().is_some() && self.destination.index().is_some()
    }

    /// Encoded action index. Out-of-range moves map to `ACTION_SPACE`,
    /// which no valid index ever equals.
    #[must_use]
    pub fn index(self) -> usize {
        match (self.source.index(), self.destination.index()) {
            (Some(s), Some(d)) => s * DESTINATION_COUNT + d,
            _ => ACTION_SPACE,
        }
    }

    /// Decode an action index; `None` for indices outside the action space.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= ACTION_SPACE {
            return None;
        }
        Some(Self {
            source: Source::from_index(index / DESTINATION_COUNT)?,
            destination: Destination::from_index(index % DESTINATION_COUNT)?,
        })
    }

    /// Every encodable move, in index order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..ACTION_SPACE).filter_map(Move::from_index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {:?}", self.source, self.destination)
    }
}

/// What happened after a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Same player acts again.
    Continued,
    /// The turn passed to `next`, whose hand has been refilled.
    TurnEnded { next: PlayerId },
    /// The player emptied their reserve stack.
    GameWon(PlayerId),
    /// A hand could not be refilled; no winner.
    GameDrawn,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::GameWon(_) | MoveOutcome::GameDrawn)
    }
}

/// An applied move with context, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub mv: Move,
    /// The card that was moved.
    pub card: Card,
    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
    pub outcome: MoveOutcome,
}
