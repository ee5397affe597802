//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use crate::game::{Guess, Keyboard};
use colored::Colorize;
use std::fmt::Write;
use std::time::Duration;

/// Format feedback as an emoji share grid row
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .statuses()
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent | LetterStatus::Unknown => '⬜',
        })
        .collect()
}

/// Color a single letter according to its status
#[must_use]
pub fn colorize_letter(letter: u8, status: LetterStatus) -> String {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match status {
        LetterStatus::Correct => text.black().on_green().to_string(),
        LetterStatus::Present => text.black().on_yellow().to_string(),
        LetterStatus::Absent => text.white().on_bright_black().to_string(),
        LetterStatus::Unknown => text.black().on_white().to_string(),
    }
}

/// Render one scored guess as a colored row
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    let mut row = String::new();
    for (letter, status) in guess.letters() {
        let _ = write!(row, "{}", colorize_letter(letter, status));
    }
    row
}

/// Render the keyboard as a single colored line, `a` through `z`
#[must_use]
pub fn keyboard_line(keyboard: &Keyboard) -> String {
    let mut line = String::new();
    for (letter, status) in keyboard.entries() {
        let _ = write!(line, "{} ", colorize_letter(letter, status));
    }
    line
}

/// Format a play duration as `m:ss` with zero-padded seconds
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn emoji_grid_row() {
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("trace").unwrap();
        let feedback = Feedback::evaluate(&secret, &guess);

        // T absent, R correct, A correct, C present, E correct
        assert_eq!(feedback_to_emoji(feedback), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn emoji_grid_perfect() {
        assert_eq!(feedback_to_emoji(Feedback::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn elapsed_zero_padded_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00");
        assert_eq!(format_elapsed(Duration::from_secs(9)), "0:09");
        assert_eq!(format_elapsed(Duration::from_secs(65)), "1:05");
        assert_eq!(format_elapsed(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn colorized_letter_is_uppercase() {
        let cell = colorize_letter(b'q', LetterStatus::Unknown);
        assert!(cell.contains('Q'));
    }
}
