//! Human player that types moves on the console.

use super::Participant;
use crate::console::SharedConsole;
use crate::games::tictactoe::{Board, Player, Position};
use anyhow::{Context, Result};
use derive_more::Display;
use tracing::{debug, warn};

const MOVE_PROMPT: &str = "What is your move? (0 - 8): ";

/// Malformed move input from a human.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// The text was not an integer.
    #[display("That is not a valid index.")]
    NotANumber(String),
    /// The integer was outside 0-8.
    #[display("Invalid! The choice must be between 0 and 8.")]
    OutOfRange(i64),
}

impl std::error::Error for InputError {}

/// Parses a board index typed by a human.
pub fn parse_move(input: &str) -> Result<Position, InputError> {
    let trimmed = input.trim();
    let index: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    usize::try_from(index)
        .ok()
        .and_then(Position::from_index)
        .ok_or(InputError::OutOfRange(index))
}

/// Human player using line input.
pub struct HumanPlayer {
    name: String,
    mark: Player,
    console: SharedConsole,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, mark: Player, console: SharedConsole) -> Self {
        Self {
            name: name.into(),
            mark,
            console,
        }
    }
}

impl Participant for HumanPlayer {
    fn propose_move(&mut self, _board: &Board) -> Result<Option<Position>> {
        let mut console = self.console.borrow_mut();
        let line = console
            .prompt(MOVE_PROMPT)
            .context("Failed to read move")?
            .with_context(|| format!("Input closed while waiting for {}", self.name))?;

        match parse_move(&line) {
            Ok(pos) => {
                debug!(player = %self.name, %pos, "Human chose position");
                Ok(Some(pos))
            }
            Err(e) => {
                warn!(player = %self.name, input = %line, error = ?e, "Malformed move input");
                console.say(&e)?;
                Ok(None)
            }
        }
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use std::io::{self, Cursor};

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move(" 4 "), Ok(Position::Center));
        assert_eq!(parse_move("0"), Ok(Position::TopLeft));
        assert_eq!(parse_move("9"), Err(InputError::OutOfRange(9)));
        assert_eq!(parse_move("-1"), Err(InputError::OutOfRange(-1)));
        assert_eq!(
            parse_move("centre"),
            Err(InputError::NotANumber("centre".to_string()))
        );
    }

    #[test]
    fn test_malformed_input_yields_no_move() {
        let console = Console::new(Cursor::new("x\n12\n7\n"), io::sink()).shared();
        let mut human = HumanPlayer::new("Human", Player::X, console);
        let board = Board::new();

        assert_eq!(human.propose_move(&board).unwrap(), None);
        assert_eq!(human.propose_move(&board).unwrap(), None);
        assert_eq!(human.propose_move(&board).unwrap(), Some(Position::BottomCenter));
        assert!(human.propose_move(&board).is_err());
    }
}
