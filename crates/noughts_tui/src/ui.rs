//! Stateless UI rendering for tic-tac-toe.
//!
//! Rendering and mouse hit testing share [`board_cells`], so a click always
//! lands on the cell that was drawn under it.

use noughts_core::{Board, GameState, Player, Position, RandomSource, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen from the app's current snapshot.
pub fn draw<R: RandomSource>(frame: &mut Frame, app: &App<R>) {
    let chunks = screen_chunks(frame.area());
    let state = app.game().state();

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], state);
    draw_board(frame, chunks[2], state.board(), app.cursor());

    let status = Paragraph::new(state.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    if let Some(notice) = app.notice() {
        let notice = Paragraph::new(notice.as_str())
            .style(Style::default().fg(Color::Magenta))
            .alignment(Alignment::Center);
        frame.render_widget(notice, chunks[4]);
    }

    let help = format!(
        "1-9/enter/click: play  r: new round  m: {}  q: quit",
        state.mode().toggle().label()
    );
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

/// Screen area of each board cell, indexed 0-8.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(screen_chunks(area)[2], BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = row_columns(row_area);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell;
        }
    }
    cells
}

/// The cell under a terminal coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    board_cells(area)
        .iter()
        .position(|cell| {
            column >= cell.x
                && column < cell.x.saturating_add(cell.width)
                && row >= cell.y
                && row < cell.y.saturating_add(cell.height)
        })
        .and_then(Position::from_index)
}

fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(1),            // Scores
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Notice
            Constraint::Length(1),            // Help
        ])
        .split(area)
}

fn row_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area)
}

fn draw_scores(frame: &mut Frame, area: Rect, state: &GameState) {
    let scores = state.scoreboard();
    let line = Line::from(vec![
        Span::styled(format!("X: {}", scores.wins(Player::X)), mark_style(Player::X)),
        Span::raw("   "),
        Span::styled(format!("O: {}", scores.wins(Player::O)), mark_style(Player::O)),
        Span::raw("   "),
        Span::styled(format!("[{}]", state.mode()), Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let sep_style = Style::default().fg(Color::DarkGray);

    for y in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
        let sep_area = Rect { y: board_area.y + y, height: 1, ..board_area };
        let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize)).style(sep_style);
        frame.render_widget(sep, sep_area.intersection(area));
    }

    let cells = board_cells(frame.area());
    for (pos, cell) in Position::ALL.into_iter().zip(cells) {
        draw_cell(frame, cell, board, cursor, pos);
        if pos.col() < 2 {
            let bar_area = Rect { x: cell.x + cell.width, width: 1, ..cell };
            let bar = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize]).style(sep_style);
            frame.render_widget(bar, bar_area.intersection(area));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => ((pos.to_index() + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => (player.to_string(), mark_style(player)),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(Span::styled(" ".repeat(CELL_WIDTH as usize), style)),
        Line::from(Span::styled(format!("{:^width$}", symbol, width = CELL_WIDTH as usize), style)),
        Line::from(Span::styled(" ".repeat(CELL_WIDTH as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
