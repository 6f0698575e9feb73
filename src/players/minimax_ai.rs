//! Automated player backed by minimax search.

use super::Participant;
use crate::ai::{choose_move, Difficulty};
use crate::games::tictactoe::{Board, Player, Position};
use anyhow::Result;
use rand::rngs::StdRng;
use tracing::debug;

/// AI that searches the game tree, with ε-random slips.
pub struct MinimaxAi {
    name: String,
    mark: Player,
    epsilon: f64,
    rng: StdRng,
}

impl MinimaxAi {
    /// Creates an AI with an explicit exploration probability.
    pub fn new(name: impl Into<String>, mark: Player, epsilon: f64, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            mark,
            epsilon,
            rng,
        }
    }

    /// Creates an AI playing at a difficulty tier.
    pub fn with_difficulty(
        name: impl Into<String>,
        mark: Player,
        difficulty: Difficulty,
        rng: StdRng,
    ) -> Self {
        Self::new(name, mark, difficulty.epsilon(), rng)
    }

    /// Exploration probability.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Participant for MinimaxAi {
    fn propose_move(&mut self, board: &Board) -> Result<Option<Position>> {
        debug!(ai = %self.name, mark = %self.mark, "AI making move");
        Ok(choose_move(board, self.mark, self.epsilon, &mut self.rng))
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_impossible_ai_blocks() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::Center, Player::O);
        let mut ai = MinimaxAi::with_difficulty(
            "AI",
            Player::O,
            Difficulty::Impossible,
            StdRng::seed_from_u64(5),
        );
        assert_eq!(ai.propose_move(&board).unwrap(), Some(Position::TopRight));
    }
}
