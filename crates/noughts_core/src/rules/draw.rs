//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board with no winning line.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}
