//! Core engine types: players, RNG, configuration, moves, errors, state.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::{Destination, Move, MoveOutcome, MoveRecord, Source, ACTION_SPACE};
pub use config::{GameConfig, BUILD_STACKS, CENTER_STACKS, HAND_SIZE, MAX_DECK_SIZE};
pub use error::{GameError, IllegalReason};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use snapshot::{CenterView, GameSnapshot, OpponentView, PlayerView, SeatSnapshot};
pub use state::{GameState, GameStatus, PlayerZones};
