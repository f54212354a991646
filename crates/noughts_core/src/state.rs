//! Game state owned by the controller, plus its read-only projections.

use crate::rules::{check_winner, is_draw};
use crate::{Board, GameMode, Move, Player, Scoreboard};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Complete game state for one session.
///
/// Only [`GameController`](crate::GameController) mutates it; everything
/// else reads a borrowed or cloned snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Player whose move is awaited from the human side.
    pub(crate) turn_owner: Player,
    /// Who the opponent is.
    pub(crate) mode: GameMode,
    /// Wins across rounds.
    pub(crate) scoreboard: Scoreboard,
    /// Accepted moves of the current round, oldest first.
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh state: empty board, X to move, zeroed scores.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            turn_owner: Player::X,
            mode,
            scoreboard: Scoreboard::new(),
            history: Vec::new(),
        }
    }

    /// Projects the status shown to the player.
    pub fn status(&self) -> GameStatus {
        GameStatus::from_state(self)
    }

    /// Projects the round phase.
    pub fn phase(&self) -> Phase {
        match self.status() {
            GameStatus::Won(player) => Phase::RoundOver(Outcome::Winner(player)),
            GameStatus::Draw => Phase::RoundOver(Outcome::Draw),
            GameStatus::InProgress(_) => Phase::AwaitingMove,
        }
    }

    /// Clears the board and history and hands the move back to X.
    pub(crate) fn clear_round(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.turn_owner = Player::X;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

/// Current status of the game, as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line is complete.
    Won(Player),
    /// Full board, no line.
    Draw,
    /// Waiting for the given player.
    InProgress(Player),
}

impl GameStatus {
    /// Winner first, then draw, then the turn owner.
    pub fn from_state(state: &GameState) -> Self {
        if let Some(winner) = check_winner(&state.board) {
            GameStatus::Won(winner)
        } else if is_draw(&state.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(state.turn_owner)
        }
    }

    /// Returns true once the round is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "It's a draw!"),
            GameStatus::InProgress(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// Round phase of the controller's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting moves.
    AwaitingMove,
    /// Decided; only a reset or mode toggle starts a new round.
    RoundOver(Outcome),
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner(Player),
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
