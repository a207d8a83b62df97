//! Move legality.
//!
//! Pure functions over `GameState`; nothing here mutates.

use crate::cards::Card;
use crate::core::{Destination, GameState, GameStatus, IllegalReason, Move, PlayerId, PlayerZones, Source};

/// Top card of `source`, without removing it.
#[must_use]
pub fn peek_source(zones: &PlayerZones, source: Source) -> Option<Card> {
    match source {
        Source::Reserve => zones.reserve.peek(),
        Source::Hand(slot) => zones.hand.get(slot),
        Source::Build(stack) => zones.builds.get(stack)?.peek(),
    }
}

/// Check that the game accepts moves and that `player` is to move.
pub fn check_turn(state: &GameState, player: PlayerId) -> Result<(), IllegalReason> {
    match state.status {
        GameStatus::InProgress => {}
        GameStatus::Finished(_) => return Err(IllegalReason::GameFinished),
        GameStatus::Aborted => return Err(IllegalReason::GameAborted),
        GameStatus::Dealing => return Err(IllegalReason::NotYourTurn),
    }
    if player != state.active_player {
        return Err(IllegalReason::NotYourTurn);
    }
    Ok(())
}

/// Check `mv` for `player`, returning the card that would move.
///
/// Checks run in a fixed order: game status, turn, index range, zone
/// pairing, source card, then center-stack sequence.
pub fn check_move(state: &GameState, player: PlayerId, mv: Move) -> Result<Card, IllegalReason> {
    check_turn(state, player)?;
    if !mv.in_range() {
        return Err(IllegalReason::SlotOutOfRange);
    }

    match (mv.source, mv.destination) {
        (Source::Reserve, Destination::Build(_)) => return Err(IllegalReason::ReserveToBuildStack),
        (Source::Build(_), Destination::Build(_)) => return Err(IllegalReason::BuildToBuildStack),
        _ => {}
    }

    let card = peek_source(state.zones(player), mv.source).ok_or(IllegalReason::EmptySource)?;

    if let Destination::Center(stack) = mv.destination {
        let center = &state.centers[stack];
        if !center.accepts(card) {
            return Err(IllegalReason::DoesNotFollow {
                card,
                needed: center.next_value(),
            });
        }
    }
    Ok(card)
}

#[must_use]
pub fn is_legal(state: &GameState, player: PlayerId, mv: Move) -> bool {
    check_move(state, player, mv).is_ok()
}

/// All legal moves for `player`, in action-index order.
///
/// Empty when it is not `player`'s turn or the game is over.
#[must_use]
pub fn legal_moves(state: &GameState, player: PlayerId) -> Vec<Move> {
    if state.status != GameStatus::InProgress || player != state.active_player {
        return Vec::new();
    }
    Move::all().filter(|&mv| is_legal(state, player, mv)).collect()
}
