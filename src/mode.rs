//! Game mode selection.

use serde::Deserialize;

/// Game mode - who plays whom?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
pub enum GameMode {
    /// Human vs Human
    #[serde(rename = "pvp")]
    #[value(name = "pvp")]
    HumanVsHuman,
    /// Human (X) vs minimax AI (O)
    #[default]
    #[serde(rename = "pvai")]
    #[value(name = "pvai")]
    HumanVsAi,
    /// AI vs AI, single game
    #[serde(rename = "aivai")]
    #[value(name = "aivai")]
    AiVsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }

    /// Whether the player is asked to play again after each game.
    pub fn offers_replay(&self) -> bool {
        !matches!(self, GameMode::AiVsAi)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
