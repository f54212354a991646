//! Application state and event handling.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{GameController, GameMode, Phase, Position, RandomSource, SeededRandom};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use crate::input::{Action, action_for};
use crate::ui;

/// Main application state: the game plus what only the terminal needs.
#[derive(Debug)]
pub struct App<R = SeededRandom> {
    game: GameController<R>,
    cursor: Position,
    notice: Option<String>,
    viewport: Rect,
    should_quit: bool,
}

impl<R: RandomSource> App<R> {
    /// Creates a new application.
    pub fn new(mode: GameMode, rng: R) -> Self {
        Self {
            game: GameController::new(mode, rng),
            cursor: Position::Center,
            notice: None,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController<R> {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the transient message shown under the status line.
    pub fn notice(&self) -> Option<&String> {
        self.notice.as_ref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the area of the last rendered frame for mouse hit testing.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for(self.cursor, key) {
            self.apply(action);
        }
    }

    /// Handles a mouse event; a left click on a cell plays it.
    #[instrument(skip(self), fields(column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = ui::cell_at(self.viewport, event.column, event.row) {
            self.cursor = pos;
            self.play(pos.to_index());
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::Play(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index);
            }
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::Reset => {
                self.game.reset_round();
                self.notice = None;
            }
            Action::ToggleMode => {
                self.game.toggle_mode();
                self.notice = Some(format!("Now playing {}. Scores cleared.", self.game.state().mode()));
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(Phase::AwaitingMove) => self.notice = None,
            Ok(Phase::RoundOver(outcome)) => {
                self.notice = Some(format!("{}. Press 'r' for a new round.", outcome));
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.notice = Some(e.to_string());
            }
        }
    }
}
