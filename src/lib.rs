//! Tic-tac-toe with a tunable minimax opponent.
//!
//! # Architecture
//!
//! - **Games**: board state, rules and outcome evaluation
//! - **AI**: exhaustive minimax search and difficulty-controlled randomness
//! - **Players**: the [`Participant`] trait with human and AI variants
//! - **Orchestrator**: alternates turns and detects the end of a game
//! - **Session**: mode wiring and the replay loop on a [`Console`]
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_minimax::{run_session, Console, Difficulty, GameConfig, GameMode};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::new(GameMode::AiVsAi, Difficulty::Impossible, Some(7));
//! run_session(&config, Console::stdio().shared())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod config;
mod console;
mod games;
mod mode;
mod orchestrator;
mod players;
mod session;

// Crate-level exports - Search and difficulty
pub use ai::{best_move, choose_move, minimax, Difficulty, DEPTH_PENALTY};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
pub use mode::GameMode;

// Crate-level exports - Console collaborator
pub use console::{Console, ConsoleView, SharedConsole};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::eval::evaluate;
pub use games::tictactoe::rules::{check_winner, is_draw, is_full, is_won};
pub use games::tictactoe::{Board, Game, GameStatus, Move, MoveError, Player, Position, Square};

// Crate-level exports - Turn coordination
pub use orchestrator::{EventSink, GameEvent, Orchestrator, Outcome, Step, TurnState};

// Crate-level exports - Participants
pub use players::{parse_move, HumanPlayer, InputError, MinimaxAi, Participant};

// Crate-level exports - Sessions
pub use session::{build_orchestrator, run_session, session_rng};
