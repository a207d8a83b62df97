use thiserror::Error;

use super::action::Move;
use super::player::PlayerId;
use crate::cards::Card;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    NotYourTurn,
    GameFinished,
    GameAborted,
    /// A hand slot or stack index that does not exist.
    SlotOutOfRange,
    /// The named source holds no card.
    EmptySource,
    /// Reserve cards may only go to center stacks.
    ReserveToBuildStack,
    /// Build stacks cannot feed each other.
    BuildToBuildStack,
    /// The card does not continue the center stack.
    DoesNotFollow { card: Card, needed: u8 },
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalReason::NotYourTurn => write!(f, "not this player's turn"),
            IllegalReason::GameFinished => write!(f, "game is finished"),
            IllegalReason::GameAborted => write!(f, "game was aborted"),
            IllegalReason::SlotOutOfRange => write!(f, "slot out of range"),
            IllegalReason::EmptySource => write!(f, "source is empty"),
            IllegalReason::ReserveToBuildStack => {
                write!(f, "reserve cards can only be played to center stacks")
            }
            IllegalReason::BuildToBuildStack => {
                write!(f, "build stacks cannot be played to build stacks")
            }
            IllegalReason::DoesNotFollow { card, needed } => {
                write!(f, "{card} cannot be played as {needed:02}")
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Recoverable: re-query the legal moves and try again.
    #[error("illegal move {mv} by {player}: {reason}")]
    IllegalMove {
        player: PlayerId,
        mv: Move,
        reason: IllegalReason,
    },
    /// An encoded action that could not be played, including indices
    /// outside the action space.
    #[error("illegal action {index} by {player}: {reason}")]
    IllegalAction {
        player: PlayerId,
        index: usize,
        reason: IllegalReason,
    },
    /// Draw and discard piles together could not refill a hand.
    #[error("deck exhausted: requested {requested} cards, delivered {delivered}")]
    DeckExhausted { requested: usize, delivered: usize },
    /// Internal consistency failure; the game instance is aborted.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A captured game that cannot be resumed.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
