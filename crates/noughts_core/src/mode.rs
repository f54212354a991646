//! Game mode selection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who is the opponent?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board and alternate X and O.
    #[default]
    PlayerVsPlayer,
    /// The human plays X and the computer answers every move as O.
    PlayerVsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "VS Player",
            GameMode::PlayerVsComputer => "VS Computer",
        }
    }

    /// Toggles between the two modes.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsComputer,
            GameMode::PlayerVsComputer => GameMode::PlayerVsPlayer,
        }
    }

    /// Whether O is played automatically.
    pub fn is_vs_computer(self) -> bool {
        self == GameMode::PlayerVsComputer
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
