//! The turn resolver: position + roll + board -> outcome.
//!
//! This is the whole rulebook of the game in one pure function. It has no
//! randomness, no state, and no failure modes: the typed inputs (`Square`
//! is 0-100, `DieRoll` is 1-6) make it total over its domain.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Square, Transition};
use crate::core::dice::DieRoll;

/// Outcome of resolving one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Where the token stops after moving, before any transition.
    /// Overshooting rolls are clamped to square 100.
    pub intermediate: Square,

    /// Where the token ends up after any escalator or eel.
    pub landed: Square,

    /// The transition taken from the intermediate square, if any.
    pub transition: Option<Transition>,
}

impl TurnOutcome {
    /// Did this roll reach the finish?
    ///
    /// Landing on square 100 directly, by clamping, or by being routed
    /// there by an escalator all count.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.landed.is_finish()
    }
}

/// Resolve one roll against the board.
///
/// Moves the token `roll` squares forward (clamped at 100), then applies
/// at most one transition from the square it stopped on. The escalator
/// table is consulted before the eel table; transitions never chain.
///
/// ```
/// use eels_and_escalators::board::{Board, Square};
/// use eels_and_escalators::core::DieRoll;
/// use eels_and_escalators::rules::resolve_turn;
///
/// let board = Board::standard();
/// let outcome = resolve_turn(
///     &board,
///     Square::new(97).unwrap(),
///     DieRoll::new(3).unwrap(),
/// );
/// assert_eq!(outcome.landed, Square::FINISH);
/// assert!(outcome.is_win());
/// ```
#[must_use]
pub fn resolve_turn(board: &Board, position: Square, roll: DieRoll) -> TurnOutcome {
    let intermediate = position.advanced_by(roll);
    let transition = board.transition_from(intermediate);
    let landed = transition.map_or(intermediate, |t| t.to);

    TurnOutcome {
        intermediate,
        landed,
        transition,
    }
}
