//! Applying a validated move.
//!
//! 1. Take the card off the source zone.
//! 2. Place it; a center stack that reaches 12 goes to the discard pile.
//! 3. An emptied reserve wins the game on the spot.
//! 4. A build-stack placement ends the turn; an emptied hand is refilled.
//!    A refill that comes up short ends the game as a draw.

use tracing::debug;

use super::turn;
use crate::cards::Card;
use crate::core::{Destination, GameError, GameState, Move, MoveOutcome, MoveRecord, PlayerZones, Source};
use crate::rules::GameResult;
use crate::zones::Placement;

fn take_source(zones: &mut PlayerZones, source: Source) -> Option<Card> {
    match source {
        Source::Reserve => zones.reserve.pop(),
        Source::Hand(slot) => zones.hand.take(slot),
        Source::Build(stack) => zones.builds.get_mut(stack)?.pop(),
    }
}

/// Apply `mv` for the active player. The move must already be legal.
///
/// Returns the outcome; the move is appended to the history either way.
pub fn apply(state: &mut GameState, mv: Move) -> Result<MoveOutcome, GameError> {
    let player = state.active_player;
    let turn_number = state.turn_number;
    let card = take_source(&mut state.players[player], mv.source).ok_or_else(|| {
        GameError::InvariantViolation(format!("{mv} applied with no card at the source"))
    })?;

    match mv.destination {
        Destination::Center(stack) => {
            let center = state.centers.get_mut(stack).ok_or_else(|| {
                GameError::InvariantViolation(format!("{mv} names a missing center stack"))
            })?;
            match center.place(card) {
                Placement::Placed { value } => {
                    debug!(%player, %card, stack, value, "played to center");
                }
                Placement::Completed { cards } => {
                    debug!(%player, %card, stack, "center stack completed");
                    state.deck.discard(cards);
                }
            }
            state.centers[stack]
                .check_sequence()
                .map_err(|e| GameError::InvariantViolation(format!("center stack {stack} {e}")))?;
        }
        Destination::Build(stack) => {
            let build = state.players[player].builds.get_mut(stack).ok_or_else(|| {
                GameError::InvariantViolation(format!("{mv} names a missing build stack"))
            })?;
            build.push(card);
            debug!(%player, %card, stack, "played to build stack");
        }
    }

    let outcome = if state.players[player].reserve.is_empty() {
        turn::finish(state, GameResult::Winner(player));
        MoveOutcome::GameWon(player)
    } else if mv.destination.ends_turn() {
        match turn::end_turn(state) {
            Ok(next) => MoveOutcome::TurnEnded { next },
            Err(GameError::DeckExhausted { .. }) => drawn(state),
            Err(e) => return Err(e),
        }
    } else if state.players[player].hand.is_empty() {
        match turn::refill_hand(state, player) {
            Ok(_) => MoveOutcome::Continued,
            Err(GameError::DeckExhausted { .. }) => drawn(state),
            Err(e) => return Err(e),
        }
    } else {
        MoveOutcome::Continued
    };

    state.history.push_back(MoveRecord {
        player,
        mv,
        card,
        turn: turn_number,
        outcome,
    });
    Ok(outcome)
}

fn drawn(state: &mut GameState) -> MoveOutcome {
    turn::finish(state, GameResult::Draw);
    MoveOutcome::GameDrawn
}
