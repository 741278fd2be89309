//! Game state: one immutable value per resolved turn.
//!
//! `GameState` is never mutated in place by consumers. The engine clones
//! the current state (cheap: roll history and winners use `im` persistent
//! vectors), applies one turn, and hands the new value back. That keeps
//! the turn resolver trivially unit-testable and leaves no hidden
//! mutation for a UI layer to race against.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dice::{DiceRng, DieRoll};
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::{Square, Transition};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one player has not finished.
    InProgress,
    /// Every player has reached the finish.
    Finished,
}

/// One resolved turn, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// The player who rolled.
    pub player: PlayerId,

    /// The dice value rolled.
    pub roll: DieRoll,

    /// Position before the roll.
    pub from: Square,

    /// Position after moving, before any transition (clamped at 100).
    pub intermediate: Square,

    /// Final position after any escalator or eel.
    pub landed: Square,

    /// The transition taken from the intermediate square, if any.
    pub transition: Option<Transition>,
}

impl TurnRecord {
    /// Did this turn win the game for its player?
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.landed.is_finish()
    }
}

/// Complete state of one game.
///
/// Created by [`crate::session::GameBuilder`], advanced one turn at a time
/// by [`crate::rules::Game`], discarded on reset. Not serializable as a
/// whole because it embeds the live dice roller; every component type is.
#[derive(Clone, Debug)]
pub struct GameState {
    players: PlayerMap<Player>,
    active_player: PlayerId,
    status: GameStatus,
    winners: Vector<PlayerId>,
    history: Vector<TurnRecord>,
    turn_number: u32,
    rng: DiceRng,
}

impl GameState {
    /// Create a fresh state for the given seats.
    ///
    /// Player 0 (the first registered) opens the game.
    #[must_use]
    pub fn new(players: Vec<Player>, seed: u64) -> Self {
        Self {
            players: PlayerMap::from_vec(players),
            active_player: PlayerId::new(0),
            status: GameStatus::InProgress,
            winners: Vector::new(),
            history: Vector::new(),
            turn_number: 1,
            rng: DiceRng::new(seed),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// A player's seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Iterate over seats in registration order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Has every player finished?
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Players who have reached the finish, in finish order.
    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.winners.iter().copied()
    }

    /// How many players have finished.
    #[must_use]
    pub fn winner_count(&self) -> usize {
        self.winners.len()
    }

    /// Has this player reached the finish?
    #[must_use]
    pub fn is_winner(&self, id: PlayerId) -> bool {
        self.players[id].has_won()
    }

    /// Every resolved turn so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &TurnRecord> {
        self.history.iter()
    }

    /// The most recent resolved turn.
    #[must_use]
    pub fn last_turn(&self) -> Option<&TurnRecord> {
        self.history.last()
    }

    /// The turn number the next roll will get (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The next player after `player`, in registration order wrapping
    /// around, that has not already won. `None` when everyone has won.
    ///
    /// A player who has not won is their own successor in a one-player
    /// game: they simply roll again.
    #[must_use]
    pub fn next_active_after(&self, player: PlayerId) -> Option<PlayerId> {
        let count = self.player_count();
        (1..=count)
            .map(|offset| PlayerId::new(((player.index() + offset) % count) as u8))
            .find(|&candidate| !self.players[candidate].has_won())
    }

    /// Apply one resolved turn to this state.
    ///
    /// The engine is the only caller; it has already resolved the roll
    /// against the board.
    pub(crate) fn record_turn(&mut self, record: TurnRecord) {
        let player = record.player;

        self.players[player].record_move(record.roll, record.landed);
        if record.is_win() && !self.players[player].has_won() {
            self.players[player].mark_won();
            self.winners.push_back(player);
        }

        self.turn_number += 1;
        self.history.push_back(record);

        match self.next_active_after(player) {
            Some(next) => self.active_player = next,
            None => self.status = GameStatus::Finished,
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut DiceRng {
        &mut self.rng
    }
}
