//! Scores a position from one mark's point of view.

use super::{rules, Board, Player};

/// Returns `1` if `perspective` has a completed line, `-1` if the other mark
/// does, and `0` otherwise (ongoing or drawn).
pub fn evaluate(board: &Board, perspective: Player) -> i8 {
    match rules::check_winner(board) {
        Some(winner) if winner == perspective => 1,
        Some(_) => -1,
        None => 0,
    }
}
