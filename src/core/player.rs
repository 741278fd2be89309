//! Player identity and per-player data.
//!
//! ## PlayerId
//!
//! Ordinal registration index, 0-based. Turn order follows registration
//! order and never changes mid-game.
//!
//! ## Player
//!
//! One seat at the table: display name, token position, roll history, and
//! the win flag.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` with O(1) access by `PlayerId`.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::dice::DieRoll;
use crate::board::Square;

/// Player identifier: the 0-based registration index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a player ID from a registration index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use eels_and_escalators::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// One seat at the table.
///
/// Mutation happens only through the engine's turn application; consumers
/// read positions and history from here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: Square,
    rolls: Vector<DieRoll>,
    has_won: bool,
}

impl Player {
    /// Register a player. Tokens begin off the board.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Square::START,
            rolls: Vector::new(),
            has_won: false,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current token position.
    #[must_use]
    pub fn position(&self) -> Square {
        self.position
    }

    /// Every roll this player has made, in order.
    pub fn rolls(&self) -> impl Iterator<Item = DieRoll> + '_ {
        self.rolls.iter().copied()
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Has this player reached the finish?
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub(crate) fn record_move(&mut self, roll: DieRoll, landed: Square) {
        self.rolls.push_back(roll);
        self.position = landed;
    }

    pub(crate) fn mark_won(&mut self) {
        self.has_won = true;
    }
}

/// Per-player data with O(1) access by `PlayerId`.
///
/// ```
/// use eels_and_escalators::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32);
/// scores[PlayerId::new(1)] += 10;
/// assert_eq!(scores[PlayerId::new(1)], 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Build a map from already-collected per-player values.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
