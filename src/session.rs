//! Play sessions: wiring participants for a mode and the replay loop.

use crate::config::GameConfig;
use crate::console::{ConsoleView, SharedConsole};
use crate::games::tictactoe::Player;
use crate::mode::GameMode;
use crate::orchestrator::{Orchestrator, Outcome};
use crate::players::{HumanPlayer, MinimaxAi, Participant};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument};

const REPLAY_PROMPT: &str = "Do you want to play again? (Enter/Any): ";

/// Root random source for a session: seeded when asked, OS entropy otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Builds the orchestrator for the configured mode.
///
/// X is always the human in human-vs-AI games. Every participant and the
/// orchestrator get their own generator split off `rng`.
#[instrument(skip(console, rng))]
pub fn build_orchestrator(
    config: &GameConfig,
    console: SharedConsole,
    rng: &mut StdRng,
) -> Orchestrator {
    let difficulty = *config.difficulty();
    let mut ai = |name: &str, mark: Player| -> Box<dyn Participant> {
        Box::new(MinimaxAi::with_difficulty(
            name,
            mark,
            difficulty,
            StdRng::from_rng(&mut *rng),
        ))
    };

    let (player_x, player_o): (Box<dyn Participant>, Box<dyn Participant>) = match config.mode() {
        GameMode::HumanVsHuman => (
            Box::new(HumanPlayer::new("Player X", Player::X, console.clone())),
            Box::new(HumanPlayer::new("Player O", Player::O, console.clone())),
        ),
        GameMode::HumanVsAi => (
            Box::new(HumanPlayer::new("Player", Player::X, console.clone())),
            ai("AI", Player::O),
        ),
        GameMode::AiVsAi => (ai("AI X", Player::X), ai("AI O", Player::O)),
    };

    let view = Box::new(ConsoleView::new(console));
    Orchestrator::new(player_x, player_o, view, StdRng::from_rng(rng))
}

/// Plays games until the player declines a rematch.
///
/// AI-vs-AI sessions play exactly one game. Returns every outcome in order.
#[instrument(skip(console))]
pub fn run_session(config: &GameConfig, console: SharedConsole) -> Result<Vec<Outcome>> {
    info!(mode = %config.mode(), difficulty = %config.difficulty(), "Starting session");
    let mut rng = session_rng(*config.seed());
    let mut orchestrator = build_orchestrator(config, console.clone(), &mut rng);
    let mut outcomes = Vec::new();

    loop {
        outcomes.push(orchestrator.run()?);
        if !config.mode().offers_replay() {
            break;
        }

        let answer = console
            .borrow_mut()
            .prompt(REPLAY_PROMPT)
            .context("Failed to read replay answer")?;
        match answer {
            Some(line) if line.trim().is_empty() => orchestrator.restart(),
            _ => {
                console.borrow_mut().say("Thank you for playing!")?;
                break;
            }
        }
    }

    info!(games = outcomes.len(), "Session finished");
    Ok(outcomes)
}
