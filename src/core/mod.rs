//! Core domain types for the game
//!
//! Pure, dependency-light types: validated words and per-letter feedback.
//! Everything here is total and side-effect free, so the scoring rules can be
//! tested without touching word lists or terminals.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{Word, WordError};

/// Fixed length of the secret word and of every guess
pub const WORD_LENGTH: usize = 5;
