//! TUI rendering with ratatui
//!
//! Tile grid, virtual keyboard, and message panel for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, TileColor};
use crate::game::{GameStatus, MAX_ATTEMPTS, Tile};
use crate::output::formatters::KEYBOARD_ROWS;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Tile grid
            Constraint::Percentage(45), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_messages(f, app, side_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let rows = app.game.rows();

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for row in &rows {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for tile in row {
            spans.push(tile_span(*tile));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn tile_span(tile: Tile) -> Span<'static> {
    let text = match tile.letter {
        Some(letter) => format!(" {letter} "),
        None => " · ".to_string(),
    };

    let style = match tile.status.tile_color() {
        Some(TileColor::Green) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(TileColor::Yellow) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(TileColor::Gray) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None if tile.letter.is_some() => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };

    Span::styled(text, style)
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let hints = app.game.hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(" ".repeat(i))];
            for letter in row.chars() {
                spans.push(key_span(letter, hints.status_of(letter)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn key_span(letter: char, status: LetterStatus) -> Span<'static> {
    let style = match status.tile_color() {
        Some(TileColor::Green) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(TileColor::Yellow) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(TileColor::Gray) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    };

    Span::styled(letter.to_string(), style)
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(message.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state_text = match app.game.status() {
        GameStatus::InProgress => "Playing".to_string(),
        GameStatus::Won => "Won!".to_string(),
        GameStatus::Lost => "Lost".to_string(),
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempts_text = format!(
        "Attempt: {}/{}",
        app.game.active_row().min(MAX_ATTEMPTS),
        MAX_ATTEMPTS
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help_text = if app.game.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Erase | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
