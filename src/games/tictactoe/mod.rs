//! Tic-tac-toe board state, rules and outcome evaluation.

mod action;
pub mod eval;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
