//! Builder for a game and its opening state.

use crate::board::Board;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::rules::Game;

/// Registers players and produces `(Game, GameState)`.
///
/// ```
/// use eels_and_escalators::session::GameBuilder;
///
/// let (game, state) = GameBuilder::new()
///     .player("Spongebob")
///     .player("Patrick")
///     .build(42);
///
/// assert_eq!(state.player_count(), 2);
/// assert!(!state.has_finished());
/// assert_eq!(game.board().transition_count(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    names: Vec<String>,
    board: Board,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            board: Board::standard(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player. Turn order follows registration order.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "Player name must not be blank");
        self.names.push(name);
        self
    }

    /// Register several players at once.
    #[must_use]
    pub fn players<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |builder, name| builder.player(name))
    }

    /// Play on a board other than the standard one.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Build the engine and the opening state.
    ///
    /// The first registered player opens the game.
    pub fn build(self, seed: u64) -> (Game, GameState) {
        assert!(
            (1..=8).contains(&self.names.len()),
            "Player count must be 1-8"
        );

        let players = self.names.into_iter().map(Player::new).collect();
        (Game::new(self.board), GameState::new(players, seed))
    }
}
