//! The 10x10 board: squares, grid layout, and transition tables.
//!
//! ## Key Types
//!
//! - `Square`: a position 0-100 (0 = off-board start, 100 = finish)
//! - `GridPos`: serpentine grid coordinates for renderers
//! - `Board`: validated escalator/eel transition tables
//! - `BoardBuilder`: table validation (direction, range, shared starts)

pub mod square;
pub mod topology;

pub use square::{GridPos, Square, BOARD_SIDE};
pub use topology::{Board, BoardBuilder, BoardError, Transition, TransitionKind};
