//! Difficulty tiers and epsilon-greedy move selection.

use super::minimax::best_move;
use crate::config::ConfigError;
use crate::games::tictactoe::{Board, Player, Position};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, instrument};

/// How often the automated opponent ignores search and plays at random.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(try_from = "u8")]
pub enum Difficulty {
    /// Level 0, random half the time.
    Easy,
    /// Level 1.
    Medium,
    /// Level 2.
    #[default]
    Hard,
    /// Level 3, never randomizes after the opening move.
    Impossible,
}

impl Difficulty {
    /// Maps a numeric level (0-3) to a tier.
    #[instrument]
    pub fn from_level(level: u8) -> Result<Self, ConfigError> {
        match level {
            0 => Ok(Difficulty::Easy),
            1 => Ok(Difficulty::Medium),
            2 => Ok(Difficulty::Hard),
            3 => Ok(Difficulty::Impossible),
            other => Err(ConfigError::new(format!(
                "Difficulty level must be between 0 and 3, got {}",
                other
            ))),
        }
    }

    /// Numeric level of this tier.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Probability of playing a uniformly random move.
    pub fn epsilon(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Medium => 0.2,
            Difficulty::Hard => 0.05,
            Difficulty::Impossible => 0.0,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level)
    }
}

/// Picks a move for `mark`.
///
/// The opening move on an empty board is always random, whatever `epsilon`
/// is. Otherwise a random move is played with probability `epsilon` and the
/// minimax-best move the rest of the time. Returns `None` on a full board.
#[instrument(skip(board, rng), fields(legal = board.legal_moves().len()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Player,
    epsilon: f64,
    rng: &mut R,
) -> Option<Position> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        debug!("No legal move available");
        return None;
    }

    // The ε draw is skipped on the opening so seeded games stay reproducible.
    if board.is_blank() || rng.random::<f64>() < epsilon {
        let pos = moves[rng.random_range(0..moves.len())];
        debug!(%pos, "Playing random move");
        return Some(pos);
    }

    let (pos, score) = best_move(board, mark)?;
    debug!(%pos, score, "Playing searched move");
    Some(pos)
}
