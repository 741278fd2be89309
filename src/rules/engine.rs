//! Turn application: rolls, advancement, and the finished-game result.
//!
//! `Game` pairs a validated board with the update function that carries a
//! `GameState` from one turn to the next. Each application returns a new
//! state value; the input state is left untouched.

use thiserror::Error;

use super::resolver::resolve_turn;
use crate::board::Board;
use crate::core::dice::DieRoll;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, TurnRecord};

/// Errors from applying a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Every player has already finished; there is nothing to roll for.
    #[error("the game is already finished")]
    GameOver,
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A single-player game, finished.
    Winner(PlayerId),
    /// A multi-player game, finished: every player in finish order.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Did this player finish first?
    #[must_use]
    pub fn is_champion(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(order) => order.first() == Some(&player),
        }
    }

    /// Finish position of a player, 0-based.
    #[must_use]
    pub fn finish_position(&self, player: PlayerId) -> Option<usize> {
        match self {
            GameResult::Winner(p) => (*p == player).then_some(0),
            GameResult::Winners(order) => order.iter().position(|&p| p == player),
        }
    }
}

/// A new state plus the record of the turn that produced it.
#[derive(Clone, Debug)]
pub struct Turn {
    /// The state after the roll.
    pub state: GameState,
    /// What happened.
    pub record: TurnRecord,
}

/// The game engine: a board plus the per-turn update function.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Create an engine for the given board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The board in play.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Roll the active player's die and resolve the turn.
    ///
    /// Draws the roll from the state's own dice roller, so a game is
    /// fully reproducible from its seed. Returns the new state and the
    /// turn record; the input state is untouched.
    pub fn take_turn(&self, state: &GameState) -> Result<Turn, TurnError> {
        if state.has_finished() {
            return Err(TurnError::GameOver);
        }

        let mut next = state.clone();
        let roll = next.rng_mut().roll_die();
        let record = self.resolve_into(&mut next, roll);
        Ok(Turn { state: next, record })
    }

    /// Resolve a known roll for the active player.
    ///
    /// Deterministic companion to [`Game::take_turn`] for replays and
    /// tests; the state's dice roller is not consumed.
    pub fn apply_roll(&self, state: &GameState, roll: DieRoll) -> Result<Turn, TurnError> {
        if state.has_finished() {
            return Err(TurnError::GameOver);
        }

        let mut next = state.clone();
        let record = self.resolve_into(&mut next, roll);
        Ok(Turn { state: next, record })
    }

    /// The final standings, once every player has finished.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        if !state.has_finished() {
            return None;
        }

        let mut winners: Vec<PlayerId> = state.winners().collect();
        if winners.len() == 1 && state.player_count() == 1 {
            return Some(GameResult::Winner(winners.remove(0)));
        }
        Some(GameResult::Winners(winners))
    }

    fn resolve_into(&self, next: &mut GameState, roll: DieRoll) -> TurnRecord {
        let player = next.active_player();
        let from = next.player(player).position();
        let outcome = resolve_turn(&self.board, from, roll);

        log::debug!(
            "turn {}: {} rolled {} from {}, landed on {}",
            next.turn_number(),
            player,
            roll,
            from,
            outcome.landed,
        );
        if let Some(transition) = outcome.transition {
            log::debug!("{} took the {} to {}", player, transition.kind, transition.to);
        }

        let record = TurnRecord {
            turn: next.turn_number(),
            player,
            roll,
            from,
            intermediate: outcome.intermediate,
            landed: outcome.landed,
            transition: outcome.transition,
        };

        next.record_turn(record.clone());

        if record.is_win() {
            log::info!("{} reached the finish", player);
        }
        if next.has_finished() {
            log::info!("game over after {} turns", next.history().count());
        }

        record
    }
}
