//! Participant trait and implementations.

mod human;
mod minimax_ai;

pub use human::{parse_move, HumanPlayer, InputError};
pub use minimax_ai::MinimaxAi;

use crate::games::tictactoe::{Board, Player, Position};
use anyhow::Result;

/// Anything that can take a turn.
pub trait Participant {
    /// Proposes a move for the current board.
    ///
    /// `Ok(None)` means no move is available yet and the caller should ask
    /// again. Errors are reserved for failures of the underlying input.
    fn propose_move(&mut self, board: &Board) -> Result<Option<Position>>;

    /// The mark this participant plays.
    fn mark(&self) -> Player;

    /// Returns the participant's display name.
    fn name(&self) -> &str;

    /// True for participants whose moves come from search.
    fn is_automated(&self) -> bool {
        false
    }
}
