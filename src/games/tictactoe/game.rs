//! Game state for a single tic-tac-toe game.

use super::action::{Move, MoveError};
use super::{Board, GameStatus, Player, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// One game: the board, whose turn it is, and the moves so far.
///
/// [`Game::apply`] is the only mutator. Status is never stored; it is
/// derived from the board on every call to [`Game::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            history: Vec::new(),
        }
    }

    /// Creates a new game with the first mark chosen uniformly at random.
    #[instrument(skip(rng))]
    pub fn with_random_start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = if rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        debug!(%first, "Starting new game");
        Self::new(first)
    }

    /// Applies a move, flipping the turn on success.
    ///
    /// On error the board and turn are left unchanged.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::InvalidMove(action.position));
        }
        if action.player != self.to_move {
            return Err(MoveError::OutOfTurn(action.player));
        }

        self.board
            .set(action.position, Square::Occupied(action.player));
        self.history.push(action);
        self.to_move = action.player.opponent();

        Ok(self.status())
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
