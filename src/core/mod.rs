//! Core engine types: players, dice, and game state.
//!
//! Everything here is board-agnostic; the board's transition tables live
//! in `crate::board` and only meet these types inside the rules engine.

pub mod dice;
pub mod player;
pub mod state;

pub use dice::{DiceRng, DiceRngState, DieRoll};
pub use player::{Player, PlayerId, PlayerMap};
pub use state::{GameState, GameStatus, TurnRecord};
