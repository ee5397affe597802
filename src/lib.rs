//! Terminal Wordle
//!
//! A terminal word-guessing game: six tries to find a secret five-letter
//! word, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use terminal_wordle::core::Word;
//! use terminal_wordle::game::{GameSession, Outcome};
//! use terminal_wordle::wordlists::Dictionary;
//!
//! let words = Dictionary::embedded();
//! let mut session = GameSession::new(Word::new("crane").unwrap());
//!
//! let guess = session.submit_guess("trace", &words).unwrap();
//! println!("{:?}", guess.feedback().statuses());
//!
//! session.submit_guess("crane", &words).unwrap();
//! assert_eq!(session.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine and keyboard aggregation
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
