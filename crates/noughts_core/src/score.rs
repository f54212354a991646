//! Running win tally across rounds.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Win counts per player. Draws are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Records one win for `player`.
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x = self.x.saturating_add(1),
            Player::O => self.o = self.o.saturating_add(1),
        }
    }

    /// Zeroes both counts.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x, self.o)
    }
}
