//! Rules engine trait consumed by agents and search code.

use serde::{Deserialize, Serialize};

use crate::core::action::{Move, MoveOutcome};
use crate::core::error::GameError;
use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player emptied their reserve stack.
    Winner(PlayerId),
    /// The cards ran out before anyone won.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: empty when `player` cannot act (not their turn, or
///   the game is over)
/// - `apply_move`: validates before mutating; an `Err` leaves the state
///   untouched unless it is an invariant violation
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Seat that is to move.
    fn active_player(&self) -> PlayerId;

    /// Every legal move for `player`, in action-index order.
    fn legal_moves(&self, player: PlayerId) -> Vec<Move>;

    /// Apply a move for the active player.
    fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Legal moves as action indices, for fixed-size policy outputs.
    fn legal_indices(&self, player: PlayerId) -> Vec<usize> {
        self.legal_moves(player).into_iter().map(Move::index).collect()
    }

    /// Whether `mv` is among `player`'s legal moves.
    fn is_legal(&self, player: PlayerId, mv: Move) -> bool {
        self.legal_moves(player).contains(&mv)
    }
}
