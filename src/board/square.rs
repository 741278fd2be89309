//! Board squares and the serpentine grid layout.
//!
//! Squares are numbered 1-100. Square 0 is the off-board start: tokens
//! begin there and enter the board on their first roll. Square 100 is the
//! finish.
//!
//! ## Grid layout
//!
//! The board is a 10x10 grid numbered in a serpentine (boustrophedon)
//! pattern starting at the bottom-left corner:
//! - row 0 (bottom) runs left to right, squares 1-10
//! - row 1 runs right to left, squares 11-20
//! - ...
//! - row 9 (top) runs right to left, ending with square 100 at the
//!   top-left corner
//!
//! `GridPos` uses board-centric coordinates (row 0 = bottom). Renderers
//! drawing top-down flip the row themselves.

use serde::{Deserialize, Serialize};

use crate::core::dice::DieRoll;

/// Side length of the board grid.
pub const BOARD_SIDE: u8 = 10;

/// A position on (or just off) the board.
///
/// Valid values are 0-100. Square 0 is the start position off the board;
/// squares 1-100 are on the grid.
///
/// ```
/// use eels_and_escalators::board::Square;
///
/// let sq = Square::new(42).unwrap();
/// assert_eq!(sq.value(), 42);
/// assert!(Square::new(101).is_none());
/// assert!(Square::START.is_start());
/// assert!(Square::FINISH.is_finish());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// The off-board start position.
    pub const START: Self = Self(0);

    /// The winning square.
    pub const FINISH: Self = Self(100);

    /// Create a square, returning `None` if the value is out of range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the square number (0-100).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Is this the off-board start position?
    #[must_use]
    pub const fn is_start(self) -> bool {
        self.0 == 0
    }

    /// Is this the winning square?
    #[must_use]
    pub const fn is_finish(self) -> bool {
        self.0 == 100
    }

    /// The square reached by moving `roll` steps forward.
    ///
    /// Rolls that would overshoot the finish are clamped to square 100;
    /// there is no exact-landing rule.
    ///
    /// ```
    /// use eels_and_escalators::board::Square;
    /// use eels_and_escalators::core::DieRoll;
    ///
    /// let six = DieRoll::new(6).unwrap();
    /// assert_eq!(Square::new(50).unwrap().advanced_by(six).value(), 56);
    /// assert_eq!(Square::new(99).unwrap().advanced_by(six), Square::FINISH);
    /// ```
    #[must_use]
    pub fn advanced_by(self, roll: DieRoll) -> Self {
        Self((self.0 + roll.value()).min(100))
    }

    /// Percentage of the board covered, for progress displays.
    #[must_use]
    pub const fn completion_percent(self) -> u8 {
        self.0
    }

    /// Iterate over every on-board square, 1 through 100.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=100).map(Square)
    }

    /// Grid coordinates of this square, or `None` for the off-board start.
    #[must_use]
    pub fn grid(self) -> Option<GridPos> {
        if self.is_start() {
            return None;
        }

        let index = self.0 - 1;
        let row = index / BOARD_SIDE;
        let across = index % BOARD_SIDE;
        let col = if row % 2 == 0 {
            across
        } else {
            BOARD_SIDE - 1 - across
        };

        Some(GridPos { row, col })
    }

    /// The square at the given grid coordinates.
    ///
    /// Returns `None` if either coordinate is outside the 10x10 grid.
    #[must_use]
    pub fn from_grid(pos: GridPos) -> Option<Self> {
        if pos.row >= BOARD_SIDE || pos.col >= BOARD_SIDE {
            return None;
        }

        let across = if pos.row % 2 == 0 {
            pos.col
        } else {
            BOARD_SIDE - 1 - pos.col
        };

        Some(Self(pos.row * BOARD_SIDE + across + 1))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_start() {
            write!(f, "start")
        } else {
            write!(f, "square {}", self.0)
        }
    }
}

/// Grid coordinates of an on-board square. Row 0 is the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    fn roll(n: u8) -> DieRoll {
        DieRoll::new(n).unwrap()
    }

    #[test]
    fn test_square_range() {
        assert!(Square::new(0).is_some());
        assert!(Square::new(100).is_some());
        assert!(Square::new(101).is_none());
        assert!(Square::new(255).is_none());
    }

    #[test]
    fn test_start_and_finish() {
        assert_eq!(Square::START.value(), 0);
        assert_eq!(Square::FINISH.value(), 100);
        assert!(Square::START.is_start());
        assert!(!Square::START.is_finish());
        assert!(Square::FINISH.is_finish());
    }

    #[test]
    fn test_advance_clamps_at_finish() {
        assert_eq!(sq(97).advanced_by(roll(3)), Square::FINISH);
        assert_eq!(sq(97).advanced_by(roll(6)), Square::FINISH);
        assert_eq!(sq(99).advanced_by(roll(1)), Square::FINISH);
        assert_eq!(Square::FINISH.advanced_by(roll(4)), Square::FINISH);
    }

    #[test]
    fn test_advance_from_start() {
        assert_eq!(Square::START.advanced_by(roll(1)), sq(1));
        assert_eq!(Square::START.advanced_by(roll(6)), sq(6));
    }

    #[test]
    fn test_grid_corners() {
        // Bottom row runs left to right.
        assert_eq!(sq(1).grid(), Some(GridPos { row: 0, col: 0 }));
        assert_eq!(sq(10).grid(), Some(GridPos { row: 0, col: 9 }));
        // Second row runs right to left.
        assert_eq!(sq(11).grid(), Some(GridPos { row: 1, col: 9 }));
        assert_eq!(sq(20).grid(), Some(GridPos { row: 1, col: 0 }));
        // Finish sits at the top-left corner.
        assert_eq!(sq(100).grid(), Some(GridPos { row: 9, col: 0 }));
    }

    #[test]
    fn test_start_has_no_grid() {
        assert_eq!(Square::START.grid(), None);
    }

    #[test]
    fn test_grid_round_trip() {
        for square in Square::all() {
            let pos = square.grid().unwrap();
            assert_eq!(Square::from_grid(pos), Some(square));
        }
    }

    #[test]
    fn test_from_grid_out_of_range() {
        assert_eq!(Square::from_grid(GridPos { row: 10, col: 0 }), None);
        assert_eq!(Square::from_grid(GridPos { row: 0, col: 10 }), None);
    }

    #[test]
    fn test_all_squares() {
        let all: Vec<_> = Square::all().collect();
        assert_eq!(all.len(), 100);
        assert_eq!(all[0], sq(1));
        assert_eq!(all[99], Square::FINISH);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Square::START), "start");
        assert_eq!(format!("{}", sq(42)), "square 42");
    }

    #[test]
    fn test_serialization() {
        let square = sq(87);
        let json = serde_json::to_string(&square).unwrap();
        let deserialized: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(square, deserialized);
    }
}
