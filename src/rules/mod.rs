//! Rules engine trait.
//!
//! Game implementations expose:
//! - Legal moves for the acting seat
//! - Move application with a definite outcome
//! - Terminal detection
//!
//! Agents, search, and training loops are written against this trait
//! and never touch the state directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
