//! Turn coordination between two participants.

use crate::games::tictactoe::{Board, Game, GameStatus, Move, MoveError, Player};
use crate::players::Participant;
use anyhow::Result;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for a move from this mark.
    AwaitingMove(Player),
    /// Game won by this mark.
    GameWon(Player),
    /// Board full with no winner.
    GameDrawn,
}

impl TurnState {
    /// True for won and drawn games.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnState::AwaitingMove(_))
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

/// What a single [`Orchestrator::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The participant had no move yet; nothing changed.
    Pending,
    /// The move was refused; nothing changed.
    Rejected(MoveError),
    /// The move was applied.
    Moved(Move),
    /// The game was already over; no one was asked.
    Finished,
}

/// Messages sent from orchestrator to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Board updated (also sent once when a game starts).
    BoardChanged(Board),
    /// Move was made.
    MoveMade {
        /// Name of the participant.
        name: String,
        /// The applied move.
        action: Move,
        /// Whether the move came from search.
        automated: bool,
    },
    /// Move was refused.
    MoveRejected {
        /// The refused move.
        action: Move,
        /// Why it was refused.
        error: MoveError,
    },
    /// Game ended.
    GameOver(Outcome),
}

/// Receives game events as they happen.
pub trait EventSink {
    /// Handles one event.
    fn handle(&mut self, event: &GameEvent) -> Result<()>;
}

impl EventSink for Vec<GameEvent> {
    fn handle(&mut self, event: &GameEvent) -> Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

impl<T: EventSink> EventSink for Rc<RefCell<T>> {
    fn handle(&mut self, event: &GameEvent) -> Result<()> {
        self.borrow_mut().handle(event)
    }
}

/// Orchestrates gameplay between two players.
///
/// Owns the game for its whole lifetime; participants only ever see a copy
/// of the board.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Participant>,
    player_o: Box<dyn Participant>,
    events: Box<dyn EventSink>,
    rng: StdRng,
}

impl Orchestrator {
    /// Creates an orchestrator; the first mark is drawn from `rng`.
    pub fn new(
        player_x: Box<dyn Participant>,
        player_o: Box<dyn Participant>,
        events: Box<dyn EventSink>,
        mut rng: StdRng,
    ) -> Self {
        Self {
            game: Game::with_random_start(&mut rng),
            player_x,
            player_o,
            events,
            rng,
        }
    }

    /// Replaces the current game, e.g. to start from a fixed position.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current state, derived from the game.
    pub fn state(&self) -> TurnState {
        match self.game.status() {
            GameStatus::InProgress => TurnState::AwaitingMove(self.game.to_move()),
            GameStatus::Won(player) => TurnState::GameWon(player),
            GameStatus::Draw => TurnState::GameDrawn,
        }
    }

    /// Asks the participant to move and applies its answer.
    #[instrument(skip(self), fields(state = ?self.state()))]
    pub fn step(&mut self) -> Result<Step> {
        let mark = match self.state() {
            TurnState::AwaitingMove(mark) => mark,
            _ => return Ok(Step::Finished),
        };

        let board = *self.game.board();
        let participant = match mark {
            Player::X => &mut self.player_x,
            Player::O => &mut self.player_o,
        };

        debug!(player = %participant.name(), "Waiting for move");
        let Some(position) = participant.propose_move(&board)? else {
            return Ok(Step::Pending);
        };

        let action = Move::new(participant.mark(), position);
        let name = participant.name().to_string();
        let automated = participant.is_automated();

        if let Err(error) = self.game.apply(action) {
            warn!(%action, %error, "Move rejected");
            self.events
                .handle(&GameEvent::MoveRejected { action, error })?;
            return Ok(Step::Rejected(error));
        }

        self.events.handle(&GameEvent::MoveMade {
            name,
            action,
            automated,
        })?;
        self.events
            .handle(&GameEvent::BoardChanged(*self.game.board()))?;

        Ok(Step::Moved(action))
    }

    /// Runs the game loop until someone wins or the board fills.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!(first = %self.game.to_move(), "Starting game orchestration");
        self.events
            .handle(&GameEvent::BoardChanged(*self.game.board()))?;

        loop {
            let outcome = match self.state() {
                TurnState::AwaitingMove(_) => {
                    self.step()?;
                    continue;
                }
                TurnState::GameWon(player) => Outcome::Winner(player),
                TurnState::GameDrawn => Outcome::Draw,
            };

            info!(?outcome, moves = self.game.history().len(), "Game over");
            self.events.handle(&GameEvent::GameOver(outcome))?;
            return Ok(outcome);
        }
    }

    /// Restarts the game with a freshly drawn first mark.
    pub fn restart(&mut self) {
        self.game = Game::with_random_start(&mut self.rng);
    }
}
