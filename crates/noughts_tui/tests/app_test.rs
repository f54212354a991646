//! Key and mouse handling through the app.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{GameMode, Player, Position, RandomSource, Square};
use noughts_tui::{App, board_cells, cell_at};
use ratatui::layout::Rect;

struct FirstPick;

impl RandomSource for FirstPick {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

const VIEWPORT: Rect = Rect { x: 0, y: 0, width: 80, height: 24 };

fn app(mode: GameMode) -> App<FirstPick> {
    let mut app = App::new(mode, FirstPick);
    app.set_viewport(VIEWPORT);
    app
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_digit_keys_play_cells() {
    let mut app = app(GameMode::PlayerVsPlayer);
    for key in ['1', '2', '4', '5', '7'] {
        app.handle_key(KeyCode::Char(key));
    }
    let game = app.game();
    assert_eq!(game.status().to_string(), "Winner: X");
    assert_eq!(game.state().scoreboard().wins(Player::X), 1);
    assert_eq!(app.notice().map(String::as_str), Some("Player X wins. Press 'r' for a new round."));
    assert_eq!(app.cursor(), Position::BottomLeft);
}

#[test]
fn test_cursor_then_enter_plays_cursor_cell() {
    let mut app = app(GameMode::PlayerVsPlayer);
    assert_eq!(app.cursor(), Position::Center);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.game().state().board().get(Position::TopLeft), Square::Occupied(Player::X));
}

#[test]
fn test_occupied_cell_shows_notice_and_keeps_turn() {
    let mut app = app(GameMode::PlayerVsPlayer);
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('5'));
    assert_eq!(*app.game().state().turn_owner(), Player::O);
    assert_eq!(app.notice().map(String::as_str), Some("Square Center is already occupied"));

    // A good move clears the notice.
    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.notice(), None);
}

#[test]
fn test_reset_and_toggle_keys() {
    let mut app = app(GameMode::PlayerVsPlayer);
    for key in ['1', '2', '4', '5', '7'] {
        app.handle_key(KeyCode::Char(key));
    }
    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.game().status().to_string(), "Next player: X");
    assert_eq!(app.game().state().scoreboard().wins(Player::X), 1);

    app.handle_key(KeyCode::Char('m'));
    assert_eq!(*app.game().state().mode(), GameMode::PlayerVsComputer);
    assert_eq!(app.game().state().scoreboard().wins(Player::X), 0);
}

#[test]
fn test_vs_computer_reply_through_keys() {
    let mut app = app(GameMode::PlayerVsComputer);
    app.handle_key(KeyCode::Char('1'));
    let board = app.game().state().board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
}

#[test]
fn test_quit_key() {
    let mut app = app(GameMode::PlayerVsPlayer);
    assert!(!app.should_quit());
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_click_plays_cell_under_pointer() {
    let mut app = app(GameMode::PlayerVsPlayer);
    let cell = board_cells(VIEWPORT)[Position::BottomRight.to_index()];
    app.handle_mouse(left_click(cell.x + 1, cell.y + 1));

    assert_eq!(app.game().state().board().get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(app.cursor(), Position::BottomRight);
}

#[test]
fn test_click_outside_board_and_other_buttons_ignored() {
    let mut app = app(GameMode::PlayerVsPlayer);
    app.handle_mouse(left_click(0, 0));
    let cell = board_cells(VIEWPORT)[0];
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        ..left_click(cell.x, cell.y)
    });
    assert!(app.game().state().history().is_empty());
}

#[test]
fn test_hit_testing_matches_layout() {
    for (index, cell) in board_cells(VIEWPORT).iter().enumerate() {
        assert!(cell.width > 0 && cell.height > 0);
        let corner = cell_at(VIEWPORT, cell.x + cell.width - 1, cell.y + cell.height - 1);
        assert_eq!(corner, Position::from_index(index));
    }
    assert_eq!(cell_at(VIEWPORT, 0, 0), None);
}
