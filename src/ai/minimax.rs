//! Exhaustive minimax search over the tic-tac-toe game tree.
//!
//! Scores are from the point of view of the searching mark. A win found at
//! depth `d` scores `1 - 0.1 * d` and a loss `-1 + 0.1 * d`, so quicker wins
//! and slower losses are preferred. There is no depth cap: the tree is at
//! most nine plies deep.

use crate::games::tictactoe::eval::evaluate;
use crate::games::tictactoe::{Board, Player, Position};

/// Score penalty per ply of depth.
pub const DEPTH_PENALTY: f64 = 0.1;

/// Value of `board` for `mark`, with `maximizing` telling whose turn it is
/// within the search (`true` for `mark`, `false` for its opponent).
///
/// Works on copies of the board; the caller's board is never modified.
pub fn minimax(board: &Board, mark: Player, depth: u32, maximizing: bool) -> f64 {
    let penalty = f64::from(depth) * DEPTH_PENALTY;
    match evaluate(board, mark) {
        1 => return 1.0 - penalty,
        -1 => return -1.0 + penalty,
        _ => {}
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return 0.0;
    }

    if maximizing {
        moves.into_iter().fold(f64::NEG_INFINITY, |best, pos| {
            best.max(minimax(&board.with_mark(pos, mark), mark, depth + 1, false))
        })
    } else {
        let opponent = mark.opponent();
        moves.into_iter().fold(f64::INFINITY, |best, pos| {
            best.min(minimax(&board.with_mark(pos, opponent), mark, depth + 1, true))
        })
    }
}

/// Best move for `mark` on `board` with its score.
///
/// Each legal move is tried in row-major order and scored as the opponent's
/// reply; the first move reaching the strictly greatest score wins ties.
/// Returns `None` when the board has no empty square.
pub fn best_move(board: &Board, mark: Player) -> Option<(Position, f64)> {
    let mut best: Option<(Position, f64)> = None;
    for pos in board.legal_moves() {
        let score = minimax(&board.with_mark(pos, mark), mark, 0, false);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }
    best
}
