//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, and message log for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board + side panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages + stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🟩 TERMINAL WORDLE — guess {}/{}",
        app.session.guess_count().min(app.session.max_guesses() - 1) + 1,
        app.session.max_guesses()
    );
    let header = Paragraph::new(title)
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
    let mut lines: Vec<Line> = Vec::with_capacity(app.session.max_guesses() + 1);
    lines.push(Line::default());

    // Scored rows
    for guess in app.session.guesses() {
        let mut spans = vec![Span::raw("  ")];
        for (letter, status) in guess.letters() {
            spans.push(Span::styled(
                format!(" {} ", char::from(letter).to_ascii_uppercase()),
                status_style(status).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // Pending input row
    if app.input_mode == InputMode::Typing {
        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let cell = app
                .input_buffer
                .as_bytes()
                .get(i)
                .map_or("_".to_string(), |&b| {
                    char::from(b).to_ascii_uppercase().to_string()
                });
            spans.push(Span::styled(
                format!(" {cell} "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // Unused rows
    let used = app.session.guess_count() + usize::from(app.input_mode == InputMode::Typing);
    for _ in used..app.session.max_guesses() {
        let mut spans = vec![Span::raw("  ")];
        for _ in 0..WORD_LENGTH {
            spans.push(Span::styled(
                " · ".to_string(),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Messages
            Constraint::Percentage(40), // Session stats
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(format!(
            "Games: {}  Won: {}",
            app.stats.total_games, app.stats.games_won
        )),
        Line::default(),
    ];

    // Distribution of winning guess counts
    for (count, &wins) in app.stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_width = wins.min(20);
        lines.push(Line::from(vec![
            Span::raw(format!("{count}: ")),
            Span::styled("█".repeat(bar_width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {wins}")),
        ]));
    }

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" This Run ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len());
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = vec![Span::raw(" ".repeat(i + 1))];
        for letter in row.bytes() {
            spans.push(Span::styled(
                format!(" {} ", char::from(letter).to_ascii_uppercase()),
                status_style(keyboard.status_of(letter)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let elapsed = app.elapsed().as_secs();
    let time = Paragraph::new(format!("Time: {}:{:02}", elapsed / 60, elapsed % 60))
        .alignment(Alignment::Center);
    f.render_widget(time, chunks[0]);

    let remaining = Paragraph::new(format!(
        "Tries left: {}",
        app.session.remaining_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Enter: Submit | Backspace: Erase | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
