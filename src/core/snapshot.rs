//! Read-only projections of the game state.
//!
//! `GameSnapshot` captures every zone, the history, and the shuffle
//! stream position, so a game can be saved and resumed exactly.
//! `PlayerView` captures what one seat can see, which is the input an
//! observation encoder works from. Neither holds references into the
//! state; both serialize with serde.

use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::{GameConfig, BUILD_STACKS, CENTER_STACKS};
use super::error::GameError;
use super::player::{PlayerId, PlayerMap};
use super::rng::{GameRng, GameRngState};
use super::state::{GameState, GameStatus, PlayerZones};
use crate::cards::Card;
use crate::zones::{CenterStack, Deck, Hand, PlacedCard, Pile};

/// One center stack, bottom to top, with the value the next card needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterView {
    pub cards: Vec<PlacedCard>,
    pub next_value: u8,
}

impl From<&CenterStack> for CenterView {
    fn from(stack: &CenterStack) -> Self {
        Self {
            cards: stack.entries().to_vec(),
            next_value: stack.next_value(),
        }
    }
}

fn centers_of(state: &GameState) -> [CenterView; CENTER_STACKS] {
    std::array::from_fn(|i| CenterView::from(&state.centers[i]))
}

fn builds_of(zones: &PlayerZones) -> [Vec<Card>; BUILD_STACKS] {
    std::array::from_fn(|i| zones.builds[i].iter().collect())
}

/// Everything one seat holds, fully revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    /// Reserve stack, bottom to top.
    pub reserve: Vec<Card>,
    pub hand: Vec<Option<Card>>,
    /// Build stacks, each bottom to top.
    pub builds: [Vec<Card>; BUILD_STACKS],
}

impl From<&PlayerZones> for SeatSnapshot {
    fn from(zones: &PlayerZones) -> Self {
        Self {
            reserve: zones.reserve.iter().collect(),
            hand: zones.hand.slots().collect(),
            builds: builds_of(zones),
        }
    }
}

impl SeatSnapshot {
    fn restore(&self) -> Result<PlayerZones, GameError> {
        let hand = Hand::from_slots(&self.hand).ok_or_else(|| {
            GameError::InvalidSnapshot(format!("hand has {} slots", self.hand.len()))
        })?;
        Ok(PlayerZones {
            reserve: Pile::from_bottom_up(self.reserve.iter().copied()),
            hand,
            builds: std::array::from_fn(|i| Pile::from_bottom_up(self.builds[i].iter().copied())),
        })
    }
}

/// Full state capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub seed: u64,
    /// Position of the shuffle stream.
    pub rng: GameRngState,
    pub status: GameStatus,
    pub active_player: PlayerId,
    pub turn_number: u32,
    /// Applied moves, oldest first.
    pub history: Vec<MoveRecord>,
    pub seats: PlayerMap<SeatSnapshot>,
    pub centers: [CenterView; CENTER_STACKS],
    /// Draw pile, bottom to top.
    pub draw_pile: Vec<Card>,
    /// Discard pile, bottom to top.
    pub discard_pile: Vec<Card>,
    pub reshuffles: u32,
}

impl GameSnapshot {
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            config: state.config.clone(),
            seed: state.rng.seed(),
            rng: state.rng.state(),
            status: state.status,
            active_player: state.active_player,
            turn_number: state.turn_number,
            history: state.history.iter().cloned().collect(),
            seats: state.players.map(|_, zones| SeatSnapshot::from(zones)),
            centers: centers_of(state),
            draw_pile: state.deck.draw_pile().iter().collect(),
            discard_pile: state.deck.discard_pile().iter().collect(),
            reshuffles: state.deck.reshuffles(),
        }
    }

    /// Rebuild the captured state. The resumed game shuffles exactly as
    /// the captured one would have. The card census baseline is whatever
    /// the snapshot holds.
    pub fn restore(&self) -> Result<GameState, GameError> {
        self.config.validate()?;
        let active_player = PlayerId::new(self.active_player.0).ok_or_else(|| {
            GameError::InvalidSnapshot(format!("no seat {}", self.active_player.0))
        })?;
        if self.rng.seed != self.seed {
            return Err(GameError::InvalidSnapshot(format!(
                "seed {} does not match shuffle stream seed {}",
                self.seed, self.rng.seed
            )));
        }

        let first = self.seats[PlayerId::FIRST].restore()?;
        let second = self.seats[PlayerId::SECOND].restore()?;
        let mut players = PlayerMap::<PlayerZones>::with_default();
        players[PlayerId::FIRST] = first;
        players[PlayerId::SECOND] = second;

        let mut centers: [CenterStack; CENTER_STACKS] = Default::default();
        for (i, (slot, view)) in centers.iter_mut().zip(&self.centers).enumerate() {
            *slot = CenterStack::from_entries(view.cards.clone())
                .map_err(|e| GameError::InvalidSnapshot(format!("center stack {i} {e}")))?;
        }

        let deck = Deck::restore(
            Pile::from_bottom_up(self.draw_pile.iter().copied()),
            Pile::from_bottom_up(self.discard_pile.iter().copied()),
            self.reshuffles,
        );

        let mut state = GameState::from_parts(
            self.config.clone(),
            deck,
            players,
            centers,
            active_player,
            GameRng::from_state(&self.rng),
        );
        state.status = self.status;
        state.turn_number = self.turn_number;
        state.history = self.history.iter().cloned().collect();
        Ok(state)
    }
}

/// What a seat can see of its opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub reserve_top: Option<Card>,
    pub reserve_count: usize,
    pub hand_count: usize,
    pub builds: [Vec<Card>; BUILD_STACKS],
}

/// The table from one seat's point of view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub perspective: PlayerId,
    pub is_my_turn: bool,
    pub status: GameStatus,
    pub reserve_top: Option<Card>,
    pub reserve_count: usize,
    pub hand: Vec<Option<Card>>,
    pub builds: [Vec<Card>; BUILD_STACKS],
    pub opponent: OpponentView,
    pub centers: [CenterView; CENTER_STACKS],
    /// Draw pile plus discard pile.
    pub drawable: usize,
}

impl PlayerView {
    #[must_use]
    pub fn capture(state: &GameState, perspective: PlayerId) -> Self {
        let own = state.zones(perspective);
        let other = state.zones(perspective.opponent());
        Self {
            perspective,
            is_my_turn: state.active_player == perspective
                && state.status == GameStatus::InProgress,
            status: state.status,
            reserve_top: own.reserve.peek(),
            reserve_count: own.reserve.len(),
            hand: own.hand.slots().collect(),
            builds: builds_of(own),
            opponent: OpponentView {
                reserve_top: other.reserve.peek(),
                reserve_count: other.reserve.len(),
                hand_count: other.hand.cards().count(),
                builds: builds_of(other),
            },
            centers: centers_of(state),
            drawable: state.deck.remaining(),
        }
    }
}
