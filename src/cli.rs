//! Command-line interface for tictactoe_minimax.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_minimax::{ConfigError, Difficulty, GameConfig, GameMode};
use tracing::instrument;

/// Play tic-tac-toe against a person or a minimax AI.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play TicTacToe!", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays whom
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,

    /// AI difficulty: 0=Easy, 1=Medium, 2=Hard, 3=Impossible (perfect)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub level: Option<u8>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional TOML config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolves the effective configuration.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        let difficulty = self.level.map(Difficulty::from_level).transpose()?;
        Ok(base.with_overrides(self.mode, difficulty, self.seed))
    }
}
