//! Line-oriented terminal I/O: board rendering, prompts and game messages.

use crate::games::tictactoe::MoveError;
use crate::orchestrator::{EventSink, GameEvent, Outcome};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Write};
use std::rc::Rc;
use tracing::instrument;

/// A console shared by every human participant and the session loop.
pub type SharedConsole = Rc<RefCell<Console>>;

/// Text input and output for one play session.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    /// Creates a console over arbitrary reader and writer.
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// Wraps the console for sharing.
    pub fn shared(self) -> SharedConsole {
        Rc::new(RefCell::new(self))
    }

    /// Writes one line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    /// Writes `message` without a newline and reads one line back.
    ///
    /// Returns `None` once input is exhausted.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// Renders game events as text on a console.
#[derive(Debug, Clone)]
pub struct ConsoleView {
    console: SharedConsole,
}

impl ConsoleView {
    /// Creates a view writing to `console`.
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl EventSink for ConsoleView {
    fn handle(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        let mut console = self.console.borrow_mut();
        match event {
            GameEvent::BoardChanged(board) => console.say(board.display())?,
            GameEvent::MoveMade {
                action,
                automated: true,
                ..
            } => console.say(format!("AI: {}", action))?,
            GameEvent::MoveMade { .. } => {}
            GameEvent::MoveRejected { action, error } => match error {
                MoveError::InvalidMove(pos) => console.say(format!(
                    "{} at ({}, {}) is an invalid move!",
                    action.player,
                    pos.row(),
                    pos.col()
                ))?,
                MoveError::OutOfTurn(player) => {
                    console.say(format!("{} it is not your turn yet.", player))?
                }
                MoveError::GameOver => console.say(error)?,
            },
            GameEvent::GameOver(Outcome::Winner(player)) => {
                console.say(format!("{} has won the game!", player))?
            }
            GameEvent::GameOver(Outcome::Draw) => console.say("It's a draw!")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_newline() {
        let mut console = Console::new(Cursor::new("4\r\n\n"), io::sink());
        assert_eq!(console.prompt("> ").unwrap(), Some("4".to_string()));
        assert_eq!(console.prompt("> ").unwrap(), Some(String::new()));
        assert_eq!(console.prompt("> ").unwrap(), None);
    }
}
