//! Presentation timeline for a resolved turn.
//!
//! The resolver is synchronous; what a UI animates is a short sequence of
//! discrete visual states with delays between them. This module derives
//! that sequence from a [`TurnRecord`] so renderers replay a turn without
//! re-deriving any rules. Delays are caller-supplied via [`Pacing`]; the
//! engine attaches no timers of its own.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Square, TransitionKind};
use crate::core::dice::DieRoll;
use crate::core::player::PlayerId;
use crate::core::state::TurnRecord;

/// Delays between the visual states of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Dice spin before the rolled face settles.
    pub dice_spin: Duration,
    /// Token hop to the intermediate square.
    pub token_move: Duration,
    /// Ride or slide along a transition.
    pub transition_slide: Duration,
}

impl Default for Pacing {
    /// The browser edition's delays.
    fn default() -> Self {
        Self {
            dice_spin: Duration::from_millis(1000),
            token_move: Duration::from_millis(300),
            transition_slide: Duration::from_millis(800),
        }
    }
}

impl Pacing {
    /// Zero delays, for headless consumers and tests.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            dice_spin: Duration::ZERO,
            token_move: Duration::ZERO,
            transition_slide: Duration::ZERO,
        }
    }
}

/// One discrete visual state of a playing turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualStep {
    /// The die settles on its rolled face.
    DiceSettled { roll: DieRoll },
    /// The token arrives on the square it rolled to.
    TokenMoved { to: Square },
    /// The token rides an escalator or slides down an eel.
    TransitionTaken { kind: TransitionKind, to: Square },
    /// The player reached the finish.
    WinAnnounced { player: PlayerId },
}

/// A visual step and the delay to wait before showing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedStep {
    /// Delay after the previous step.
    pub after: Duration,
    pub step: VisualStep,
}

/// Steps per turn: dice, move, optional transition, optional win.
pub type TurnTimeline = SmallVec<[TimedStep; 4]>;

/// Derive the visual sequence for one resolved turn.
///
/// The win announcement, when present, follows its preceding step
/// immediately: the original UI surfaces it together with the final
/// position update.
#[must_use]
pub fn turn_timeline(record: &TurnRecord, pacing: &Pacing) -> TurnTimeline {
    let mut steps = TurnTimeline::new();

    steps.push(TimedStep {
        after: pacing.dice_spin,
        step: VisualStep::DiceSettled { roll: record.roll },
    });
    steps.push(TimedStep {
        after: pacing.token_move,
        step: VisualStep::TokenMoved {
            to: record.intermediate,
        },
    });

    if let Some(transition) = record.transition {
        steps.push(TimedStep {
            after: pacing.transition_slide,
            step: VisualStep::TransitionTaken {
                kind: transition.kind,
                to: transition.to,
            },
        });
    }

    if record.is_win() {
        steps.push(TimedStep {
            after: Duration::ZERO,
            step: VisualStep::WinAnnounced {
                player: record.player,
            },
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Transition;
    use crate::core::DieRoll;

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    fn record(from: u8, die: u8, intermediate: u8, landed: u8, transition: Option<Transition>) -> TurnRecord {
        TurnRecord {
            turn: 1,
            player: PlayerId::new(0),
            roll: DieRoll::new(die).unwrap(),
            from: sq(from),
            intermediate: sq(intermediate),
            landed: sq(landed),
            transition,
        }
    }

    #[test]
    fn test_plain_move_is_two_steps() {
        let steps = turn_timeline(&record(10, 2, 12, 12, None), &Pacing::default());

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].after, Duration::from_millis(1000));
        assert_eq!(
            steps[0].step,
            VisualStep::DiceSettled {
                roll: DieRoll::new(2).unwrap()
            }
        );
        assert_eq!(steps[1].after, Duration::from_millis(300));
        assert_eq!(steps[1].step, VisualStep::TokenMoved { to: sq(12) });
    }

    #[test]
    fn test_transition_adds_slide_step() {
        let eel = Transition {
            kind: TransitionKind::Eel,
            to: sq(53),
        };
        let steps = turn_timeline(&record(50, 6, 56, 53, Some(eel)), &Pacing::default());

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].step, VisualStep::TokenMoved { to: sq(56) });
        assert_eq!(steps[2].after, Duration::from_millis(800));
        assert_eq!(
            steps[2].step,
            VisualStep::TransitionTaken {
                kind: TransitionKind::Eel,
                to: sq(53)
            }
        );
    }

    #[test]
    fn test_win_announced_last_with_no_delay() {
        let steps = turn_timeline(&record(97, 3, 100, 100, None), &Pacing::default());

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].after, Duration::ZERO);
        assert_eq!(
            steps[2].step,
            VisualStep::WinAnnounced {
                player: PlayerId::new(0)
            }
        );
    }

    #[test]
    fn test_escalator_to_finish_has_all_four_steps() {
        let lift = Transition {
            kind: TransitionKind::Escalator,
            to: sq(100),
        };
        let steps = turn_timeline(&record(76, 4, 80, 100, Some(lift)), &Pacing::default());

        assert_eq!(steps.len(), 4);
        assert!(matches!(steps[2].step, VisualStep::TransitionTaken { .. }));
        assert!(matches!(steps[3].step, VisualStep::WinAnnounced { .. }));
    }

    #[test]
    fn test_custom_pacing() {
        let pacing = Pacing {
            dice_spin: Duration::from_millis(10),
            token_move: Duration::from_millis(20),
            transition_slide: Duration::from_millis(30),
        };
        let steps = turn_timeline(&record(10, 2, 12, 12, None), &pacing);

        assert_eq!(steps[0].after, Duration::from_millis(10));
        assert_eq!(steps[1].after, Duration::from_millis(20));
    }

    #[test]
    fn test_instant_pacing_is_all_zero() {
        let steps = turn_timeline(&record(10, 2, 12, 12, None), &Pacing::instant());
        assert!(steps.iter().all(|s| s.after == Duration::ZERO));
    }
}
