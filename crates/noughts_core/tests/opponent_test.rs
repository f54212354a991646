//! Tests for the greedy computer opponent.

use noughts_core::{Board, Player, Position, RandomSource, Square, select_move};

/// Parses nine characters (`X`, `O`, anything else empty) in row-major order.
fn board(marks: &str) -> Board {
    let mut board = Board::new();
    for (pos, mark) in Position::ALL.iter().zip(marks.chars()) {
        match mark {
            'X' => board.set(*pos, Square::Occupied(Player::X)),
            'O' => board.set(*pos, Square::Occupied(Player::O)),
            _ => {}
        }
    }
    board
}

/// Stub that always answers with a fixed index and counts calls.
struct FixedPick {
    index: usize,
    calls: usize,
}

impl FixedPick {
    fn new(index: usize) -> Self {
        Self { index, calls: 0 }
    }
}

impl RandomSource for FixedPick {
    fn pick(&mut self, len: usize) -> usize {
        self.calls += 1;
        self.index.min(len - 1)
    }
}

/// Stub for paths that must stay deterministic.
struct NeverPick;

impl RandomSource for NeverPick {
    fn pick(&mut self, _len: usize) -> usize {
        panic!("random source consulted");
    }
}

#[test]
fn test_empty_board_takes_center() {
    assert_eq!(select_move(&board("........."), Player::O, &mut NeverPick), Some(Position::Center));
}

#[test]
fn test_center_taken_takes_first_corner() {
    assert_eq!(select_move(&board("....X...."), Player::O, &mut NeverPick), Some(Position::TopLeft));
}

#[test]
fn test_skips_taken_corners_in_order() {
    // Center and the first corner taken, no open line for anyone.
    let board = board("O...X....");
    assert_eq!(select_move(&board, Player::O, &mut NeverPick), Some(Position::TopRight));
}

#[test]
fn test_blocks_opponent_line() {
    assert_eq!(select_move(&board("XX.O....."), Player::O, &mut NeverPick), Some(Position::TopRight));
}

#[test]
fn test_blocks_lowest_index_threat() {
    // X threatens both 2 (top row) and 3 (left column).
    let board = board("XX..O.X.O");
    assert_eq!(select_move(&board, Player::O, &mut NeverPick), Some(Position::TopRight));
}

#[test]
fn test_win_beats_block() {
    // X could win at 2, O can win at 5: O takes the win.
    let board = board("XX.OO.X..");
    assert_eq!(select_move(&board, Player::O, &mut NeverPick), Some(Position::MiddleRight));
}

#[test]
fn test_works_for_either_symbol() {
    let board = board("OO.X.....");
    assert_eq!(select_move(&board, Player::X, &mut NeverPick), Some(Position::TopRight));
}

#[test]
fn test_full_board_has_no_move() {
    assert_eq!(select_move(&board("XOXOXXOXO"), Player::O, &mut NeverPick), None);
}

#[test]
fn test_random_fallback_goes_through_source() {
    // O X O / _ X _ / X O X: center and corners taken, neither empty edge
    // completes a line for anyone.
    let board = board("OXO.X.XOX");

    let mut rng = FixedPick::new(0);
    assert_eq!(select_move(&board, Player::O, &mut rng), Some(Position::MiddleLeft));
    assert_eq!(rng.calls, 1);

    let mut rng = FixedPick::new(1);
    assert_eq!(select_move(&board, Player::O, &mut rng), Some(Position::MiddleRight));
    assert_eq!(rng.calls, 1);
}

#[test]
fn test_heuristic_paths_never_touch_random_source() {
    let boards = [".........", "....X....", "XX.O.....", "XX.OO.X..", "O...X...."];
    for marks in boards {
        let mut rng = FixedPick::new(0);
        assert!(select_move(&board(marks), Player::O, &mut rng).is_some());
        assert_eq!(rng.calls, 0, "random source used for {marks}");
    }
}
