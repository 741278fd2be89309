//! Board topology: the escalator and eel transition tables.
//!
//! A board is two lookup tables mapping a transition's start square to its
//! end square. Escalators carry a token up the board, eels carry it down.
//! `BoardBuilder` validates a board before play:
//!
//! - no square may start both an escalator and an eel,
//! - escalators must lead upward and eels downward,
//! - starts lie in 1-99, ends in 1-100.
//!
//! With validation in place a resolved square triggers at most one
//! transition. Lookup still has a documented precedence (escalator before
//! eel) so that unvalidated table data stays deterministic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::square::Square;

/// Direction of a board transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Moves a token from a lower square to a higher one.
    Escalator,
    /// Moves a token from a higher square to a lower one.
    Eel,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Escalator => write!(f, "escalator"),
            TransitionKind::Eel => write!(f, "eel"),
        }
    }
}

/// A transition taken from a landed square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub to: Square,
}

/// Errors found while validating a board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A square appears as a start in both tables, or twice in one table.
    #[error("square {0} already starts a transition")]
    DuplicateStart(Square),

    /// Transition starts must be playable squares short of the finish.
    #[error("transition cannot start at square {0}")]
    StartOutOfPlay(u8),

    /// Transition ends must be on the board.
    #[error("transition cannot end at square {0}")]
    EndOutOfPlay(u8),

    /// An escalator must end on a higher square than it starts.
    #[error("escalator from {from} to {to} does not go up")]
    EscalatorNotUpward { from: Square, to: Square },

    /// An eel must end on a lower square than it starts.
    #[error("eel from {from} to {to} does not go down")]
    EelNotDownward { from: Square, to: Square },
}

/// A validated 10x10 board with its transition tables.
///
/// ```
/// use eels_and_escalators::board::{Board, Square, TransitionKind};
///
/// let board = Board::standard();
/// let one = Square::new(1).unwrap();
///
/// let transition = board.transition_from(one).unwrap();
/// assert_eq!(transition.kind, TransitionKind::Escalator);
/// assert_eq!(transition.to.value(), 38);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Board {
    escalators: FxHashMap<Square, Square>,
    eels: FxHashMap<Square, Square>,
}

impl Board {
    /// Start building a board.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// The board used by the browser edition of the game.
    ///
    /// The source tables listed square 16 in both maps; the eel 16 -> 6 is
    /// kept (the move goes down) and the conflicting escalator entry is
    /// dropped. The downward "escalator" 48 -> 26 is carried as an eel for
    /// the same reason.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .escalator(1, 38)
            .escalator(4, 14)
            .escalator(9, 31)
            .escalator(21, 42)
            .escalator(28, 84)
            .escalator(36, 44)
            .escalator(51, 67)
            .escalator(71, 91)
            .escalator(80, 100)
            .eel(16, 6)
            .eel(47, 26)
            .eel(48, 26)
            .eel(49, 11)
            .eel(56, 53)
            .eel(62, 19)
            .eel(64, 60)
            .eel(87, 24)
            .eel(93, 73)
            .eel(95, 75)
            .eel(98, 78)
            .build()
            .expect("standard board tables are valid")
    }

    /// The tabletop board layout.
    #[must_use]
    pub fn classic() -> Self {
        Self::builder()
            .escalator(4, 14)
            .escalator(9, 31)
            .escalator(20, 38)
            .escalator(28, 84)
            .escalator(40, 59)
            .escalator(51, 67)
            .escalator(63, 81)
            .escalator(71, 91)
            .eel(16, 6)
            .eel(47, 26)
            .eel(49, 11)
            .eel(56, 53)
            .eel(62, 19)
            .eel(64, 60)
            .eel(87, 24)
            .eel(93, 73)
            .eel(95, 75)
            .eel(98, 78)
            .build()
            .expect("classic board tables are valid")
    }

    /// Where the escalator starting at `square` leads, if there is one.
    #[must_use]
    pub fn escalator_to(&self, square: Square) -> Option<Square> {
        self.escalators.get(&square).copied()
    }

    /// Where the eel starting at `square` leads, if there is one.
    #[must_use]
    pub fn eel_to(&self, square: Square) -> Option<Square> {
        self.eels.get(&square).copied()
    }

    /// The transition triggered by landing on `square`, if any.
    ///
    /// The escalator table is consulted before the eel table.
    #[must_use]
    pub fn transition_from(&self, square: Square) -> Option<Transition> {
        if let Some(to) = self.escalator_to(square) {
            return Some(Transition {
                kind: TransitionKind::Escalator,
                to,
            });
        }
        self.eel_to(square).map(|to| Transition {
            kind: TransitionKind::Eel,
            to,
        })
    }

    /// Does an escalator start at `square`?
    #[must_use]
    pub fn is_escalator_start(&self, square: Square) -> bool {
        self.escalators.contains_key(&square)
    }

    /// Does an eel start at `square`?
    #[must_use]
    pub fn is_eel_start(&self, square: Square) -> bool {
        self.eels.contains_key(&square)
    }

    /// Iterate over (start, end) pairs of all escalators.
    pub fn escalators(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.escalators.iter().map(|(&from, &to)| (from, to))
    }

    /// Iterate over (start, end) pairs of all eels.
    pub fn eels(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.eels.iter().map(|(&from, &to)| (from, to))
    }

    /// Total number of transitions on the board.
    #[must_use]
    pub fn transition_count(&self) -> usize {
        self.escalators.len() + self.eels.len()
    }
}

/// Builder that validates transition tables before producing a [`Board`].
///
/// Squares are given as raw numbers for table literals; out-of-range
/// numbers are reported by `build`.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    escalators: Vec<(u8, u8)>,
    eels: Vec<(u8, u8)>,
}

impl BoardBuilder {
    /// Add an escalator from `from` up to `to`.
    #[must_use]
    pub fn escalator(mut self, from: u8, to: u8) -> Self {
        self.escalators.push((from, to));
        self
    }

    /// Add an eel from `from` down to `to`.
    #[must_use]
    pub fn eel(mut self, from: u8, to: u8) -> Self {
        self.eels.push((from, to));
        self
    }

    /// Validate the tables and build the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::default();

        for &(from, to) in &self.escalators {
            let (from, to) = Self::checked_pair(from, to)?;
            if to <= from {
                return Err(BoardError::EscalatorNotUpward { from, to });
            }
            Self::check_fresh_start(&board, from)?;
            board.escalators.insert(from, to);
        }

        for &(from, to) in &self.eels {
            let (from, to) = Self::checked_pair(from, to)?;
            if to >= from {
                return Err(BoardError::EelNotDownward { from, to });
            }
            Self::check_fresh_start(&board, from)?;
            board.eels.insert(from, to);
        }

        Ok(board)
    }

    fn checked_pair(from: u8, to: u8) -> Result<(Square, Square), BoardError> {
        // Starts at 0 or 100 can never be landed on mid-game.
        let from_sq = match Square::new(from) {
            Some(sq) if !sq.is_start() && !sq.is_finish() => sq,
            _ => return Err(BoardError::StartOutOfPlay(from)),
        };
        let to_sq = match Square::new(to) {
            Some(sq) if !sq.is_start() => sq,
            _ => return Err(BoardError::EndOutOfPlay(to)),
        };
        Ok((from_sq, to_sq))
    }

    fn check_fresh_start(board: &Board, from: Square) -> Result<(), BoardError> {
        if board.escalators.contains_key(&from) || board.eels.contains_key(&from) {
            return Err(BoardError::DuplicateStart(from));
        }
        Ok(())
    }
}
