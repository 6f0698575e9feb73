//! Automated opponent: minimax search plus difficulty-controlled randomness.

mod difficulty;
mod minimax;

pub use difficulty::{choose_move, Difficulty};
pub use minimax::{best_move, minimax, DEPTH_PENALTY};
