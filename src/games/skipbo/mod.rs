//! Two-player Skip-Bo.
//!
//! - 162 numbered cards (ranks 1-12, 18 of each) and 18 wild cards
//! - Each seat gets a 30-card reserve and a 5-card hand
//! - Cards go from reserve, hand, or a build-stack top onto one of four
//!   shared center stacks, which count up from 1 to 12
//! - Wild cards play as whatever value the center stack needs next
//! - Playing a hand card onto one of your four build stacks ends the turn
//! - Emptying your reserve wins; running out of cards to draw is a draw

mod executor;
mod game;
mod legality;
mod turn;

pub use game::{SkipBoBuilder, SkipBoGame};
