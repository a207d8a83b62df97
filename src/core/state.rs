//! Game state: every zone on the table plus turn bookkeeping.
//!
//! ## PlayerZones
//!
//! What one seat owns: reserve stack, hand, and four build stacks.
//!
//! ## GameState
//!
//! - Draw and discard piles (`Deck`)
//! - Both seats' zones
//! - Four shared center stacks
//! - Active player, status, turn number
//! - Move history and the shuffle RNG
//!
//! The rules in `games::skipbo` are the only code that mutates it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::{GameConfig, BUILD_STACKS, CENTER_STACKS};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, CardCensus};
use crate::rules::GameResult;
use crate::zones::{CenterStack, Deck, Hand, Pile};

/// Zones belonging to one seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    /// Private stack that must be emptied to win.
    pub reserve: Pile,
    pub hand: Hand,
    /// Personal holding stacks, no rank restriction.
    pub builds: [Pile; BUILD_STACKS],
}

impl PlayerZones {
    /// Every card this seat holds.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.reserve
            .iter()
            .chain(self.hand.cards())
            .chain(self.builds.iter().flat_map(Pile::iter))
    }
}

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Cards are being dealt; no moves yet.
    Dealing,
    /// The active player is to move.
    InProgress,
    Finished(GameResult),
    /// An internal consistency check failed; the game cannot continue.
    Aborted,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,

    pub status: GameStatus,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Turn number (starts at 1, increments on every turn change).
    pub turn_number: u32,

    pub deck: Deck,

    pub players: PlayerMap<PlayerZones>,

    pub centers: [CenterStack; CENTER_STACKS],

    /// Applied moves, oldest first.
    pub history: Vector<MoveRecord>,

    /// Shuffle source for the opening deal and every recycle.
    pub rng: GameRng,

    /// Composition fixed at creation; the census is checked against it.
    initial_census: CardCensus,
}

impl GameState {
    /// Create an undealt state: all cards shuffled into the draw pile.
    #[must_use]
    pub fn new(config: GameConfig, mut rng: GameRng) -> Self {
        let cards = crate::cards::build_deck(config.wild_cards, config.copies_per_rank);
        let initial_census = CardCensus::from_cards(cards.iter().copied());
        let deck = Deck::shuffled(cards, &mut rng);
        Self {
            config,
            status: GameStatus::Dealing,
            active_player: PlayerId::FIRST,
            turn_number: 1,
            deck,
            players: PlayerMap::with_default(),
            centers: Default::default(),
            history: Vector::new(),
            rng,
            initial_census,
        }
    }

    /// Create a state from explicit zones, in progress, for setting up
    /// positions. The census baseline is whatever the zones hold.
    #[must_use]
    pub fn from_parts(
        config: GameConfig,
        deck: Deck,
        players: PlayerMap<PlayerZones>,
        centers: [CenterStack; CENTER_STACKS],
        active_player: PlayerId,
        rng: GameRng,
    ) -> Self {
        let mut state = Self {
            config,
            status: GameStatus::InProgress,
            active_player,
            turn_number: 1,
            deck,
            players,
            centers,
            history: Vector::new(),
            rng,
            initial_census: CardCensus::new(),
        };
        state.initial_census = state.census();
        state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_) | GameStatus::Aborted)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Finished(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn zones(&self, player: PlayerId) -> &PlayerZones {
        &self.players[player]
    }

    /// Cards left in a seat's reserve stack.
    #[must_use]
    pub fn reserve_count(&self, player: PlayerId) -> usize {
        self.players[player].reserve.len()
    }

    /// Every card on the table, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck
            .cards()
            .chain(self.players.iter().flat_map(|(_, z)| z.cards()))
            .chain(self.centers.iter().flat_map(CenterStack::cards))
    }

    #[must_use]
    pub fn census(&self) -> CardCensus {
        CardCensus::from_cards(self.all_cards())
    }

    /// The composition the census must always match.
    #[must_use]
    pub fn initial_census(&self) -> &CardCensus {
        &self.initial_census
    }

    /// Clone for hypothetical play. The clone gets a forked RNG so its
    /// reshuffles do not mirror the real game's.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        let mut cloned = self.clone();
        cloned.rng = self.rng.fork();
        cloned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_undealt() {
        let state = GameState::new(GameConfig::default(), GameRng::new(42));

        assert_eq!(state.status, GameStatus::Dealing);
        assert_eq!(state.active_player, PlayerId::FIRST);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.deck.draw_pile().len(), 234);
        assert_eq!(state.reserve_count(PlayerId::FIRST), 0);
        assert!(state.centers.iter().all(CenterStack::is_empty));
    }

    #[test]
    fn test_census_matches_initial() {
        let state = GameState::new(GameConfig::default(), GameRng::new(42));
        assert_eq!(state.census().diff(state.initial_census()), None);
        assert_eq!(state.census().total(), 234);
    }

    #[test]
    fn test_player_zone_cards() {
        let mut zones = PlayerZones::default();
        zones.reserve.push(Card::Number(1));
        zones.hand.fill([Card::Wild]);
        zones.builds[2].push(Card::Number(8));

        let mut cards: Vec<_> = zones.cards().collect();
        cards.sort_unstable();
        assert_eq!(cards, vec![Card::Wild, Card::Number(1), Card::Number(8)]);
    }

    #[test]
    fn test_from_parts_baseline() {
        let mut players = PlayerMap::<PlayerZones>::with_default();
        players[PlayerId::SECOND].reserve.push(Card::Number(3));
        let state = GameState::from_parts(
            GameConfig::default(),
            Deck::default(),
            players,
            Default::default(),
            PlayerId::SECOND,
            GameRng::new(1),
        );

        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.initial_census().total(), 1);
        assert_eq!(state.reserve_count(PlayerId::SECOND), 1);
    }

    #[test]
    fn test_clone_state_forks_rng() {
        let mut state = GameState::new(GameConfig::default(), GameRng::new(42));
        let cloned = state.clone_state();
        assert_ne!(cloned.rng.seed(), state.rng.seed());
        assert_eq!(cloned.deck, state.deck);
    }
}
