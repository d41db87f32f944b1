//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{KeyboardHints, Verdict};
use crate::game::{RoundState, RoundStatus};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// What a single board cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Empty,
    Filled(char),
    Scored(char, Verdict),
}

impl TileState {
    fn style(self) -> Style {
        match self {
            Self::Empty => Style::default().fg(Color::DarkGray),
            Self::Filled(_) => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            Self::Scored(_, verdict) => verdict_style(verdict),
        }
    }

    fn label(self) -> String {
        match self {
            Self::Empty => " · ".to_string(),
            Self::Filled(c) | Self::Scored(c, _) => format!(" {c} "),
        }
    }
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Grid of tiles: one row per attempt, one column per letter
#[must_use]
pub fn board_rows(state: &RoundState) -> Vec<Vec<TileState>> {
    let width = state.word_length();
    let current = state.current_row();
    let in_progress = !state.status().is_finished();

    (0..state.max_attempts())
        .map(|row| {
            if let Some(record) = state.guesses().get(row) {
                record
                    .word
                    .text()
                    .chars()
                    .zip(record.feedback.verdicts())
                    .map(|(c, &v)| TileState::Scored(c, v))
                    .collect()
            } else if row == current && in_progress {
                let typed: Vec<char> = state.current_guess().chars().collect();
                (0..width)
                    .map(|i| typed.get(i).map_or(TileState::Empty, |&c| TileState::Filled(c)))
                    .collect()
            } else {
                vec![TileState::Empty; width]
            }
        })
        .collect()
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(4),    // Messages
        ])
        .split(main_chunks[1]);

    render_keyboard(f, app.controller.hints(), side_chunks[0]);
    render_messages(f, app, side_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🤖 AI WORDLE")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let mut lines = vec![Line::from("")];
    for row in board_rows(state) {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for tile in row {
            spans.push(Span::styled(tile.label(), tile.style()));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = format!(
        " Board: {} letters, {} left ",
        state.word_length(),
        state.attempts_left()
    );
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, hints: &KeyboardHints, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let style = hints.get(c).map_or_else(Style::default, verdict_style);
                    [Span::styled(format!(" {c} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let status = app.controller.status();
    let mode = Paragraph::new(format!("Round: {status}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match status {
        RoundStatus::Playing => format!(
            "Type letters | Enter: Submit | Esc: Quit | {} words, {} check",
            app.source_name, app.validator_name
        ),
        RoundStatus::Submitting => "Checking word...".to_string(),
        RoundStatus::Won | RoundStatus::Lost => "n: New Round | q: Quit".to_string(),
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
