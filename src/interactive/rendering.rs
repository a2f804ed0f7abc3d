//! TUI rendering with ratatui
//!
//! Header, status line, the grid, an AZERTY keyboard and the share text once
//! the game is over.

use super::app::App;
use crate::core::CellState;
use crate::game::{DisplayCell, MAX_ATTEMPTS};
use crate::output::formatters::AZERTY_ROWS;
use crate::output::share_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                      // Header
            Constraint::Length(3),                      // Status line
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Grid
            Constraint::Length(5),                      // Keyboard
            Constraint::Min(3),                         // Share text or help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_status(f, app, chunks[1]);
    render_grid(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_footer(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let session = app.board.session();
    let subtitle = if session.is_over() {
        "Game over".to_owned()
    } else {
        format!("Word of {} letters", session.width())
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            session.puzzle().title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = app.board.session();
    let (text, color) = if let Some(error) = &app.error {
        (error.as_str(), Color::Red)
    } else if let Some(message) = app.board.visible_message() {
        let color = if session.has_won() {
            Color::Green
        } else {
            Color::Red
        };
        (message, color)
    } else {
        ("", Color::White)
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let width = app.board.session().width();
    let rows: Vec<Line> = (0..MAX_ATTEMPTS)
        .map(|row| {
            let spans: Vec<Span> = (0..width)
                .map(|column| grid_span(app.board.cell(row, column)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(grid, area);
}

fn grid_span(cell: DisplayCell) -> Span<'static> {
    match (cell.letter, cell.placeholder) {
        (Some(letter), false) => Span::styled(format!(" {letter} "), state_style(cell.state)),
        (Some(letter), true) => {
            Span::styled(format!(" {letter} "), Style::default().fg(Color::DarkGray))
        }
        (None, true) => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        (None, false) => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
    }
}

/// Tile colors, red for well placed letters as in the TV game
fn state_style(state: CellState) -> Style {
    match state {
        CellState::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        CellState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellState::Absent => Style::default().fg(Color::White).bg(Color::Blue),
        CellState::Empty => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.board.visible_keys();
    let lines: Vec<Line> = AZERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let state = keys.get(key);
                    let style = if state == CellState::Empty {
                        Style::default().fg(Color::White).bg(Color::DarkGray)
                    } else {
                        state_style(state)
                    };
                    Span::styled(format!(" {key} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let share = if app.board.is_revealing() {
        None
    } else {
        share_text(app.board.session(), &app.share_footer)
    };

    let footer = match share {
        Some(text) => Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Share ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            ),
        None => Paragraph::new("Enter: Submit | Backspace: Erase | Esc: Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(footer, area);
}
