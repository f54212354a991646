//! Greedy one-ply computer opponent.
//!
//! Priority: own immediate win, then block the opponent's immediate win,
//! then center, then the first free corner, then a random free square.
//! There is no deeper lookahead, so a fork beats it.

use crate::rng::RandomSource;
use crate::rules::check_winner;
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// Picks the computer's next move, or `None` on a full board.
#[instrument(skip(board, rng), fields(board = %board.display().replace('\n', " ")))]
pub fn select_move<R: RandomSource + ?Sized>(
    board: &Board,
    computer: Player,
    rng: &mut R,
) -> Option<Position> {
    let empty = Position::valid_moves(board);
    if empty.is_empty() {
        return None;
    }

    for symbol in [computer, computer.opponent()] {
        if let Some(pos) = winning_move(board, &empty, symbol) {
            debug!(%pos, %symbol, "Taking immediate line");
            return Some(pos);
        }
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    if let Some(corner) = Position::CORNERS.into_iter().find(|&c| board.is_empty(c)) {
        return Some(corner);
    }

    let choice = empty[rng.pick(empty.len())];
    debug!(pos = %choice, "Falling back to random square");
    Some(choice)
}

/// First empty position (ascending) that completes a line for `symbol`.
fn winning_move(board: &Board, empty: &[Position], symbol: Player) -> Option<Position> {
    empty
        .iter()
        .copied()
        .find(|&pos| check_winner(&board.with_mark(pos, symbol)) == Some(symbol))
}
