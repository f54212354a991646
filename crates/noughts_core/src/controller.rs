//! Turn sequencing and scoring.

use crate::opponent::select_move;
use crate::rng::{RandomSource, SeededRandom};
use crate::{
    GameMode, GameState, GameStatus, Move, MoveError, Outcome, Phase, Player, Position, Square,
};
use tracing::{debug, info, instrument};

/// The symbol the computer plays in [`GameMode::PlayerVsComputer`].
pub const COMPUTER: Player = Player::O;

/// Owns the [`GameState`] and is the only thing that mutates it.
///
/// Every call runs to completion, including the computer's reply, so the
/// state returned by [`state`](Self::state) afterwards is always settled.
#[derive(Debug, Clone)]
pub struct GameController<R = SeededRandom> {
    state: GameState,
    rng: R,
}

impl<R: RandomSource> GameController<R> {
    /// Creates a controller with an explicit random source.
    #[instrument(skip(rng))]
    pub fn new(mode: GameMode, rng: R) -> Self {
        Self {
            state: GameState::new(mode),
            rng,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the state for rendering.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Status line projection of the current state.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Round phase of the current state.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Plays the turn owner's mark at `index` (0-8).
    ///
    /// In vs-computer mode the computer answers within the same call, and the
    /// turn always returns to X afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the move is ignored. The state is left
    /// exactly as it was.
    #[instrument(skip(self), fields(player = %self.state.turn_owner, mode = %self.state.mode))]
    pub fn apply_move(&mut self, index: usize) -> Result<Phase, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if self.state.status().is_over() {
            debug!("Ignoring move after round end");
            return Err(MoveError::RoundOver);
        }
        if !self.state.board.is_empty(pos) {
            debug!(%pos, "Ignoring move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.turn_owner;
        self.place(pos, player);

        if let Some(outcome) = self.settle() {
            return Ok(Phase::RoundOver(outcome));
        }

        match self.state.mode {
            GameMode::PlayerVsComputer => {
                if let Some(reply) = select_move(&self.state.board, COMPUTER, &mut self.rng) {
                    debug!(%reply, "Computer replies");
                    self.place(reply, COMPUTER);
                }
                self.state.turn_owner = Player::X;
                if let Some(outcome) = self.settle() {
                    return Ok(Phase::RoundOver(outcome));
                }
            }
            GameMode::PlayerVsPlayer => {
                self.state.turn_owner = player.opponent();
            }
        }

        Ok(Phase::AwaitingMove)
    }

    /// Clears the board for a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        debug!("Resetting round");
        self.state.clear_round();
    }

    /// Switches between vs-player and vs-computer, starting over with zeroed
    /// scores.
    #[instrument(skip(self), fields(from = %self.state.mode))]
    pub fn toggle_mode(&mut self) {
        self.state.mode = self.state.mode.toggle();
        self.reset_round();
        self.state.scoreboard.reset();
        info!(mode = %self.state.mode, "Game mode changed");
    }

    fn place(&mut self, pos: Position, player: Player) {
        self.state.board.set(pos, Square::Occupied(player));
        self.state.history.push(Move::new(player, pos));
    }

    /// Scores a freshly decided round. Called once per placement, so a win
    /// is recorded exactly once.
    fn settle(&mut self) -> Option<Outcome> {
        match self.state.status() {
            GameStatus::Won(winner) => {
                self.state.scoreboard.record_win(winner);
                info!(%winner, score = %self.state.scoreboard, "Round won");
                Some(Outcome::Winner(winner))
            }
            GameStatus::Draw => {
                info!("Round drawn");
                Some(Outcome::Draw)
            }
            GameStatus::InProgress(_) => None,
        }
    }
}
