//! The Skip-Bo engine: the only type agents and training loops talk to.

use im::Vector;
use tracing::error;

use super::{executor, legality, turn};
use crate::core::{
    GameConfig, GameError, GameRng, GameSnapshot, GameState, GameStatus, IllegalReason, Move,
    MoveOutcome, MoveRecord, PlayerId, PlayerView,
};
use crate::rules::{GameResult, RulesEngine};

/// A two-player Skip-Bo game.
///
/// ```
/// use skipbo_engine::games::skipbo::SkipBoGame;
/// use skipbo_engine::rules::RulesEngine;
///
/// let mut game = SkipBoGame::new_game(Some(42));
/// while !game.is_finished() {
///     let player = game.active_player();
///     let mv = game.legal_moves(player)[0];
///     game.apply_move(mv).unwrap();
/// }
/// assert!(game.result().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SkipBoGame {
    state: GameState,
}

/// Builder for creating a `SkipBoGame`.
#[derive(Clone, Debug, Default)]
pub struct SkipBoBuilder {
    config: GameConfig,
}

impl SkipBoBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn reserve_size(mut self, size: usize) -> Self {
        self.config.reserve_size = size;
        self
    }

    #[must_use]
    pub fn wild_cards(mut self, count: usize) -> Self {
        self.config.wild_cards = count;
        self
    }

    #[must_use]
    pub fn copies_per_rank(mut self, count: usize) -> Self {
        self.config.copies_per_rank = count;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate the configuration, shuffle, and deal.
    pub fn build(self) -> Result<SkipBoGame, GameError> {
        self.config.validate()?;
        SkipBoGame::deal(self.config)
    }
}

impl SkipBoGame {
    /// Deal a standard game. `None` picks a random seed, which is still
    /// recorded and available from `seed()`.
    #[must_use]
    pub fn new_game(seed: Option<u64>) -> Self {
        let mut state = Self::shuffled(GameConfig {
            seed,
            ..GameConfig::default()
        });
        // 234 cards always cover the standard deal of 70.
        let dealt = turn::deal(&mut state);
        debug_assert!(dealt.is_ok(), "standard deal failed: {dealt:?}");
        Self { state }
    }

    fn deal(config: GameConfig) -> Result<Self, GameError> {
        let mut state = Self::shuffled(config);
        turn::deal(&mut state)?;
        Ok(Self { state })
    }

    /// Undealt state. A missing seed is drawn here and written back into
    /// the config.
    fn shuffled(mut config: GameConfig) -> GameState {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        config.seed = Some(rng.seed());
        GameState::new(config, rng)
    }

    #[must_use]
    pub fn builder() -> SkipBoBuilder {
        SkipBoBuilder::new()
    }

    /// Resume a captured game.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, GameError> {
        Ok(Self {
            state: snapshot.restore()?,
        })
    }

    /// Wrap a state built by hand, e.g. a test position.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// The seed that determines every shuffle of this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.state.rng.seed()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.state.turn_number
    }

    #[must_use]
    pub fn remaining_reserve_count(&self, player: PlayerId) -> usize {
        self.state.reserve_count(player)
    }

    /// Cards left to draw, counting the discard pile.
    #[must_use]
    pub fn remaining_drawable(&self) -> usize {
        self.state.deck.remaining()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.state.history
    }

    /// Check `mv` for `player` without applying it.
    pub fn check(&self, player: PlayerId, mv: Move) -> Result<(), GameError> {
        legality::check_move(&self.state, player, mv)
            .map(|_| ())
            .map_err(|reason| GameError::IllegalMove { player, mv, reason })
    }

    /// Apply `mv` on behalf of `player`, who must be the active player.
    pub fn play(&mut self, player: PlayerId, mv: Move) -> Result<MoveOutcome, GameError> {
        self.check(player, mv)?;

        let outcome = match executor::apply(&mut self.state, mv) {
            Ok(outcome) => outcome,
            Err(e) => return Err(self.abort(e)),
        };
        if let Err(e) = self.check_after_move() {
            return Err(self.abort(e));
        }
        Ok(outcome)
    }

    /// Apply an encoded action for the active player.
    ///
    /// Refusals are reported as `IllegalAction` with the raw index, using
    /// the same check order as `play`.
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let player = self.state.active_player;
        let refuse = |reason: IllegalReason| GameError::IllegalAction {
            player,
            index,
            reason,
        };
        legality::check_turn(&self.state, player).map_err(refuse)?;
        let mv = Move::from_index(index).ok_or(refuse(IllegalReason::SlotOutOfRange))?;
        legality::check_move(&self.state, player, mv).map_err(refuse)?;
        self.play(player, mv)
    }

    /// Full capture of every zone.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }

    /// What `player` can see.
    #[must_use]
    pub fn observe(&self, player: PlayerId) -> PlayerView {
        PlayerView::capture(&self.state, player)
    }

    /// Check center-stack sequences and card conservation.
    pub fn verify_integrity(&self) -> Result<(), GameError> {
        for (i, center) in self.state.centers.iter().enumerate() {
            center
                .check_sequence()
                .map_err(|e| GameError::InvariantViolation(format!("center stack {i} {e}")))?;
        }
        if let Some(diff) = self.state.census().diff(self.state.initial_census()) {
            return Err(GameError::InvariantViolation(diff));
        }
        Ok(())
    }

    /// Clone for hypothetical play, with an independent shuffle stream.
    #[must_use]
    pub fn clone_for_search(&mut self) -> Self {
        Self {
            state: self.state.clone_state(),
        }
    }

    fn check_after_move(&self) -> Result<(), GameError> {
        if cfg!(debug_assertions) {
            self.verify_integrity()
        } else {
            Ok(())
        }
    }

    fn abort(&mut self, err: GameError) -> GameError {
        if let GameError::InvariantViolation(detail) = &err {
            error!(seed = self.seed(), %detail, "aborting game");
            self.state.status = GameStatus::Aborted;
        }
        err
    }
}

impl RulesEngine for SkipBoGame {
    fn active_player(&self) -> PlayerId {
        self.state.active_player
    }

    fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        legality::legal_moves(&self.state, player)
    }

    fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        self.play(self.state.active_player, mv)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.state.result()
    }

    fn is_legal(&self, player: PlayerId, mv: Move) -> bool {
        legality::is_legal(&self.state, player, mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{Destination, PlayerMap, PlayerZones, Source, ACTION_SPACE};
    use crate::zones::{CenterStack, Deck, Pile};

    #[test]
    fn test_new_game_deals() {
        let game = SkipBoGame::new_game(Some(42));

        assert_eq!(game.seed(), 42);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.active_player(), PlayerId::FIRST);
        assert_eq!(game.remaining_reserve_count(PlayerId::FIRST), 30);
        assert_eq!(game.remaining_reserve_count(PlayerId::SECOND), 30);
        assert_eq!(game.remaining_drawable(), 164);
        assert!(game.verify_integrity().is_ok());
    }

    #[test]
    fn test_new_game_without_seed_records_one() {
        let game = SkipBoGame::new_game(None);
        let replay = SkipBoGame::new_game(Some(game.seed()));
        assert_eq!(game.snapshot(), replay.snapshot());
    }

    #[test]
    fn test_builder_matches_new_game() {
        let built = SkipBoGame::builder().seed(5).build().unwrap();
        let direct = SkipBoGame::new_game(Some(5));
        assert_eq!(built.snapshot(), direct.snapshot());
    }

    #[test]
    fn test_builder_small_reserve() {
        let game = SkipBoGame::builder().reserve_size(5).seed(1).build().unwrap();
        assert_eq!(game.remaining_reserve_count(PlayerId::SECOND), 5);
        assert_eq!(game.remaining_drawable(), 234 - 20);
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let err = SkipBoGame::builder().reserve_size(0).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let mut game = SkipBoGame::new_game(Some(3));
        let before = game.snapshot();

        let mv = Move::new(Source::Reserve, Destination::Build(0));
        let err = game.apply_move(mv).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                player: PlayerId::FIRST,
                mv,
                reason: IllegalReason::ReserveToBuildStack
            }
        );
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_play_for_wrong_player() {
        let mut game = SkipBoGame::new_game(Some(3));
        let mv = Move::new(Source::Hand(0), Destination::Build(0));
        assert!(matches!(
            game.play(PlayerId::SECOND, mv),
            Err(GameError::IllegalMove {
                reason: IllegalReason::NotYourTurn,
                ..
            })
        ));
        assert!(game.legal_moves(PlayerId::SECOND).is_empty());
    }

    #[test]
    fn test_apply_index_out_of_range() {
        let mut game = SkipBoGame::new_game(Some(3));
        assert_eq!(
            game.apply_index(ACTION_SPACE),
            Err(GameError::IllegalAction {
                player: PlayerId::FIRST,
                index: ACTION_SPACE,
                reason: IllegalReason::SlotOutOfRange
            })
        );
    }

    #[test]
    fn test_apply_index_illegal_move_reports_index() {
        let mut game = SkipBoGame::new_game(Some(3));
        let index = Move::new(Source::Reserve, Destination::Build(2)).index();
        assert_eq!(
            game.apply_index(index),
            Err(GameError::IllegalAction {
                player: PlayerId::FIRST,
                index,
                reason: IllegalReason::ReserveToBuildStack
            })
        );
    }

    #[test]
    fn test_builder_rejects_overflowing_sizes() {
        let err = SkipBoGame::builder()
            .copies_per_rank(usize::MAX / 4)
            .build()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let err = SkipBoGame::builder()
            .reserve_size(usize::MAX)
            .build()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_builder_records_drawn_seed() {
        let game = SkipBoGame::builder().build().unwrap();
        assert_eq!(game.config().seed, Some(game.seed()));
    }

    #[test]
    fn test_apply_index_hand_to_build() {
        let mut game = SkipBoGame::new_game(Some(3));
        let index = Move::new(Source::Hand(0), Destination::Build(0)).index();
        assert_eq!(
            game.apply_index(index),
            Ok(MoveOutcome::TurnEnded {
                next: PlayerId::SECOND
            })
        );
    }

    #[test]
    fn test_corrupted_center_aborts_game() {
        let mut players = PlayerMap::<PlayerZones>::with_default();
        for player in PlayerId::both() {
            players[player].reserve = Pile::from_bottom_up([Card::Number(9), Card::Number(9)]);
            players[player].hand.fill([Card::Number(3), Card::Number(5)]);
        }
        let mut bad = CenterStack::new();
        bad.push_unchecked(Card::Number(1), 1);
        bad.push_unchecked(Card::Number(4), 2);
        let state = GameState::from_parts(
            GameConfig::default(),
            Deck::from_piles(Pile::from_bottom_up(vec![Card::Wild; 10]), Pile::new()),
            players,
            [bad, CenterStack::new(), CenterStack::new(), CenterStack::new()],
            PlayerId::FIRST,
            GameRng::new(0),
        );
        let mut game = SkipBoGame::from_state(state);

        let mv = Move::new(Source::Hand(0), Destination::Center(0));
        assert!(matches!(
            game.apply_move(mv),
            Err(GameError::InvariantViolation(_))
        ));
        assert_eq!(game.status(), GameStatus::Aborted);
        assert!(game.is_finished());
        assert_eq!(game.result(), None);
        assert!(game.legal_moves(PlayerId::FIRST).is_empty());

        let retry = Move::new(Source::Hand(1), Destination::Build(0));
        assert!(matches!(
            game.apply_move(retry),
            Err(GameError::IllegalMove {
                reason: IllegalReason::GameAborted,
                ..
            })
        ));
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut players = PlayerMap::<PlayerZones>::with_default();
        players[PlayerId::FIRST].reserve = Pile::from_bottom_up([Card::Wild]);
        players[PlayerId::FIRST].hand.fill([Card::Number(2)]);
        let state = GameState::from_parts(
            GameConfig::default(),
            Deck::default(),
            players,
            Default::default(),
            PlayerId::FIRST,
            GameRng::new(0),
        );
        let mut game = SkipBoGame::from_state(state);

        let win = Move::new(Source::Reserve, Destination::Center(0));
        assert_eq!(game.apply_move(win), Ok(MoveOutcome::GameWon(PlayerId::FIRST)));
        assert_eq!(game.is_terminal(), Some(GameResult::Winner(PlayerId::FIRST)));

        let after = Move::new(Source::Hand(0), Destination::Center(0));
        assert!(matches!(
            game.apply_move(after),
            Err(GameError::IllegalMove {
                reason: IllegalReason::GameFinished,
                ..
            })
        ));

        // Status is checked before the index is decoded.
        for index in [0, ACTION_SPACE, usize::MAX] {
            assert_eq!(
                game.apply_index(index),
                Err(GameError::IllegalAction {
                    player: PlayerId::FIRST,
                    index,
                    reason: IllegalReason::GameFinished
                })
            );
        }
    }

    #[test]
    fn test_resumed_game_reshuffles_like_original() {
        // Two cards left to draw and a full discard pile: the next turn
        // change recycles it.
        let mut players = PlayerMap::<PlayerZones>::with_default();
        for player in PlayerId::both() {
            players[player].reserve = Pile::from_bottom_up([Card::Number(9), Card::Number(8)]);
        }
        players[PlayerId::FIRST].hand.fill([Card::Number(4)]);
        players[PlayerId::SECOND].hand.fill([Card::Number(6)]);
        let discard: Vec<Card> = (1..=12).map(Card::Number).chain([Card::Wild; 6]).collect();
        let state = GameState::from_parts(
            GameConfig::default(),
            Deck::from_piles(
                Pile::from_bottom_up([Card::Number(2), Card::Number(3)]),
                Pile::from_bottom_up(discard),
            ),
            players,
            Default::default(),
            PlayerId::FIRST,
            GameRng::new(21),
        );
        let mut original = SkipBoGame::from_state(state);

        let json = serde_json::to_string(&original.snapshot()).unwrap();
        let captured: GameSnapshot = serde_json::from_str(&json).unwrap();
        let mut resumed = SkipBoGame::from_snapshot(&captured).unwrap();
        assert_eq!(resumed.snapshot(), original.snapshot());

        let mv = Move::new(Source::Hand(0), Destination::Build(0));
        assert_eq!(original.apply_move(mv), resumed.apply_move(mv));

        assert_eq!(original.state().deck.reshuffles(), 1);
        assert_eq!(resumed.snapshot(), original.snapshot());
        assert!(resumed.verify_integrity().is_ok());
    }

    #[test]
    fn test_resume_mid_game() {
        let mut game = SkipBoGame::new_game(Some(12));
        for _ in 0..25 {
            let mv = game.legal_moves(game.active_player())[0];
            game.apply_move(mv).unwrap();
        }
        let mut resumed = SkipBoGame::from_snapshot(&game.snapshot()).unwrap();
        assert_eq!(resumed.history(), game.history());

        while !game.is_finished() {
            let mv = game.legal_moves(game.active_player())[0];
            assert_eq!(game.apply_move(mv), resumed.apply_move(mv));
        }
        assert_eq!(resumed.snapshot(), game.snapshot());
        assert_eq!(resumed.result(), game.result());
    }

    #[test]
    fn test_clone_for_search_is_independent() {
        let mut game = SkipBoGame::new_game(Some(8));
        let mut probe = game.clone_for_search();

        let mv = probe.legal_moves(PlayerId::FIRST)[0];
        probe.apply_move(mv).unwrap();

        assert_eq!(game.history().len(), 0);
        assert_eq!(probe.history().len(), 1);
    }
}
