//! Key bindings.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    Cursor(Position),
    /// Play the cell at this index.
    Play(usize),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Start a new round.
    Reset,
    /// Switch between vs-player and vs-computer.
    ToggleMode,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::ToggleMode),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Play(d as usize - 1)),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
