//! Game rules: the turn resolver and turn application.
//!
//! `resolve_turn` is the pure rule evaluator; `Game` wraps it with turn
//! order, win tracking, and the one-new-state-per-turn update contract.

pub mod engine;
pub mod resolver;

pub use engine::{Game, GameResult, Turn, TurnError};
pub use resolver::{resolve_turn, TurnOutcome};
