//! Stateless UI rendering for the arena.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use crate::games::tictactoe::{Board, GameStatus, Mark, Position, Square, WinResult};

const RULES: [&str; 3] = [
    "• Players take turns placing X and O",
    "• Get 3 in a row to win (horizontal, vertical, or diagonal)",
    "• If all squares are filled with no winner, it's a draw",
];

const HELP: &str = "Arrows/1-9: Move | Enter: Place | N: New Round | R: Reset All | Q: Quit";

/// Draws the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(15),   // Board and side panels
            Constraint::Length(5), // Rules
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_game(frame, body[0], app);
    draw_side(frame, body[1], app);

    let rules = Paragraph::new(RULES.iter().map(|r| Line::from(*r)).collect::<Vec<_>>())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("How to Play"));
    frame.render_widget(rules, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.engine().current_status();
    let status_style = match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        GameStatus::InProgress { .. } => Style::default().fg(Color::White),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(format!(" {} ", status), status_style)).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Once decided the board is inert, so the cursor is hidden.
    let cursor = (!status.is_decided()).then_some(app.cursor());
    draw_board(frame, inner, app.engine().board(), cursor, status.win());
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    win: Option<&WinResult>,
) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, win, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(rows[row * 2 + 1].width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    win: Option<&WinResult>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, pos, cursor == Some(pos), win);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    selected: bool,
    win: Option<&WinResult>,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if win.is_some_and(|w| w.contains(pos)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![Line::from(""), Line::from(Span::styled(format!(" {} ", symbol), style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_side(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let scores = app.engine().scoreboard();
    let score_line = |label: &'static str, value: u32, color: Color| {
        Line::from(vec![
            Span::raw(format!("{:<10}", label)),
            Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    let scoreboard = Paragraph::new(vec![
        score_line("Player X:", *scores.x(), Color::Blue),
        score_line("Player O:", *scores.o(), Color::Red),
        score_line("Draws:", *scores.draws(), Color::Gray),
    ])
    .block(Block::default().borders(Borders::ALL).title("Scoreboard"));
    frame.render_widget(scoreboard, chunks[0]);

    let history = app.engine().history();
    let lines: Vec<Line> = if history.is_empty() {
        vec![Line::from(Span::styled(
            "No games played yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        history
            .recent(app.history_limit())
            .map(|entry| Line::from(entry.to_string()))
            .collect()
    };
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Game History"),
    );
    frame.render_widget(panel, chunks[1]);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
