//! Dealing, hand refills, and turn changes.

use tracing::{debug, info};

use crate::core::{GameError, GameState, GameStatus, PlayerId};
use crate::rules::GameResult;

/// Deal reserves and opening hands, then hand the first turn to seat 0.
///
/// Each seat gets its whole reserve and then its hand before the next
/// seat is dealt. A validated config always covers the deal; an
/// unvalidated one that runs short fails with `DeckExhausted` and leaves
/// the game in `Dealing`.
pub fn deal(state: &mut GameState) -> Result<(), GameError> {
    debug_assert_eq!(state.status, GameStatus::Dealing);
    let reserve_size = state.config.reserve_size;
    for player in PlayerId::both() {
        let reserve = state.deck.draw(reserve_size, &mut state.rng);
        let delivered = reserve.len();
        state.players[player].reserve.extend(reserve);
        if delivered < reserve_size {
            return Err(GameError::DeckExhausted {
                requested: reserve_size,
                delivered,
            });
        }
        refill_hand(state, player)?;
    }
    state.active_player = PlayerId::FIRST;
    state.status = GameStatus::InProgress;
    debug!(
        seed = state.rng.seed(),
        draw_pile = state.deck.draw_pile().len(),
        "dealt"
    );
    Ok(())
}

/// Fill `player`'s empty hand slots from the deck.
///
/// Whatever is drawn goes into the hand even on a short draw, so no card
/// leaves play. Returns the number of cards drawn.
pub fn refill_hand(state: &mut GameState, player: PlayerId) -> Result<usize, GameError> {
    let requested = state.players[player].hand.empty_slots();
    if requested == 0 {
        return Ok(0);
    }

    let drawn = state.deck.draw(requested, &mut state.rng);
    let delivered = drawn.len();
    let (placed, leftover) = state.players[player].hand.fill(drawn);
    debug_assert!(leftover.is_empty() && placed == delivered);

    debug!(%player, requested, delivered, "refilled hand");
    if delivered < requested {
        return Err(GameError::DeckExhausted {
            requested,
            delivered,
        });
    }
    Ok(delivered)
}

/// Pass the turn to the other seat and refill their hand.
///
/// The turn changes even if the refill comes up short; the caller turns
/// that error into a drawn game.
pub fn end_turn(state: &mut GameState) -> Result<PlayerId, GameError> {
    let next = state.active_player.opponent();
    state.active_player = next;
    state.turn_number += 1;
    debug!(%next, turn = state.turn_number, "turn passed");
    refill_hand(state, next)?;
    Ok(next)
}

/// Mark the game finished.
pub fn finish(state: &mut GameState, result: GameResult) {
    state.status = GameStatus::Finished(result);
    info!(
        ?result,
        turn = state.turn_number,
        moves = state.history.len() + 1,
        "game finished"
    );
}
