//! # eels-and-escalators
//!
//! A deterministic engine for "Eels and Escalators", a 10x10 board game
//! in the Snakes-and-Ladders family: roll a die, move your token, ride
//! escalators up and slide down eels, reach square 100 to win.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: `resolve_turn` maps (board, position, roll) to an
//!    outcome with no state, randomness, or failure modes. Typed inputs
//!    (`Square`, `DieRoll`) make it total over its domain.
//!
//! 2. **One state per turn**: `GameState` is an immutable value. The
//!    engine clones it (O(1) via `im` persistent vectors), applies one
//!    turn, and returns the new value alongside a `TurnRecord`.
//!
//! 3. **Deterministic dice**: ChaCha8 seeded per game; the same seed and
//!    boards replay identically. Forkable for what-if branches.
//!
//! 4. **Presentation stays out**: rendering concerns get data, not
//!    callbacks. Renderers read grid coordinates per square and a
//!    per-turn timeline of discrete visual steps with caller-supplied
//!    delays.
//!
//! ## Modules
//!
//! - `core`: players, dice, game state
//! - `board`: squares, serpentine grid layout, transition tables
//! - `rules`: the turn resolver and turn application
//! - `session`: player registration and game setup
//! - `timeline`: visual step sequences for renderers

pub mod board;
pub mod core;
pub mod rules;
pub mod session;
pub mod timeline;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRngState, DieRoll, GameState, GameStatus, Player, PlayerId, PlayerMap, TurnRecord,
};

pub use crate::board::{Board, BoardBuilder, BoardError, GridPos, Square, Transition, TransitionKind};

pub use crate::rules::{resolve_turn, Game, GameResult, Turn, TurnError, TurnOutcome};

pub use crate::session::GameBuilder;

pub use crate::timeline::{turn_timeline, Pacing, TimedStep, TurnTimeline, VisualStep};
