//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameError, GameSession, Outcome};
use crate::wordlists::{Dictionary, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Application state
pub struct App<'a> {
    words: &'a Dictionary,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    started: Instant,
    finished_after: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go into the pending guess
    Typing,
    /// Session is terminal, waiting for new-game/quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Win/loss tallies across the sessions of this run
#[derive(Debug, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = number of guesses a win took (index 0 unused)
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn new(max_guesses: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_guesses + 1],
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a Dictionary, max_guesses: usize) -> Self {
        let session = GameSession::with_max_guesses(words.pick_secret(), max_guesses);
        let stats = Statistics::new(max_guesses);

        Self {
            words,
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Guess the {WORD_LENGTH}-letter word!"),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Esc to quit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            should_quit: false,
            input_mode: InputMode::Typing,
            started: Instant::now(),
            finished_after: None,
        }
    }

    /// Time played in the current session
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_after
            .unwrap_or_else(|| self.started.elapsed())
    }

    /// Submit the pending input buffer as a guess
    pub fn submit_current(&mut self) {
        let raw = self.input_buffer.clone();

        match self.session.submit_guess(&raw, self.words).map(|_| ()) {
            Ok(()) => {
                self.input_buffer.clear();
                match self.session.outcome() {
                    Outcome::Won => self.finish_won(),
                    Outcome::Lost => self.finish_lost(),
                    Outcome::InProgress => {
                        let remaining = self.session.remaining_guesses();
                        self.add_message(
                            &format!(
                                "{remaining} {} left",
                                if remaining == 1 { "try" } else { "tries" }
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(err @ (GameError::InvalidLength(_) | GameError::UnknownWord(_))) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(err @ GameError::SessionOver(_)) => {
                // Key handling should have left Typing mode already
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    fn finish_won(&mut self) {
        self.finished_after = Some(self.started.elapsed());
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        let guess_count = self.session.guess_count();
        if guess_count < self.stats.guess_distribution.len() {
            self.stats.guess_distribution[guess_count] += 1;
        }

        self.input_mode = InputMode::GameOver;

        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn finish_lost(&mut self) {
        self.finished_after = Some(self.started.elapsed());
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        self.add_message(
            &format!(
                "💀 Out of guesses! The word was {}",
                self.session.secret().text().to_uppercase()
            ),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a fresh session with a new secret
    pub fn new_game(&mut self) {
        self.session =
            GameSession::with_max_guesses(self.words.pick_secret(), self.session.max_guesses());
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.started = Instant::now();
        self.finished_after = None;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Ignore other keys once the game is over
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        if app.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
