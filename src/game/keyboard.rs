//! Session-wide letter knowledge
//!
//! Tracks the best status ever observed for each letter of the alphabet, the
//! way the on-screen keyboard colors its keys. Merging is monotonic: a letter
//! already known `Correct` never regresses to `Present` or `Absent` when a
//! later guess reuses it in a worse spot.

use crate::core::{Feedback, LetterStatus, Word};

const ALPHABET_SIZE: usize = 26;

/// Best-known status per letter, `a` through `z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    statuses: [LetterStatus; ALPHABET_SIZE],
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    /// Create a keyboard with every letter `Unknown`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statuses: [LetterStatus::Unknown; ALPHABET_SIZE],
        }
    }

    /// Merge one scored guess into the aggregate
    ///
    /// Each letter keeps the more specific of its stored status and the new
    /// one, so recording the same guess twice changes nothing.
    pub fn record(&mut self, word: &Word, feedback: &Feedback) {
        for (&letter, &status) in word.letters().iter().zip(feedback.statuses()) {
            let slot = &mut self.statuses[usize::from(letter - b'a')];
            if status > *slot {
                *slot = status;
            }
        }
    }

    /// Best-known status for a letter
    ///
    /// Letters outside `a`-`z` report `Unknown`.
    #[must_use]
    pub fn status_of(&self, letter: u8) -> LetterStatus {
        if letter.is_ascii_lowercase() {
            self.statuses[usize::from(letter - b'a')]
        } else {
            LetterStatus::Unknown
        }
    }

    /// Iterate `(letter, status)` pairs in alphabetical order
    pub fn entries(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'a'..=b'z').map(|letter| (letter, self.status_of(letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(secret: &str, guess: &str) -> (Word, Feedback) {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::evaluate(&secret, &guess);
        (guess, feedback)
    }

    #[test]
    fn starts_all_unknown() {
        let keyboard = Keyboard::new();
        for (_, status) in keyboard.entries() {
            assert_eq!(status, LetterStatus::Unknown);
        }
    }

    #[test]
    fn record_marks_guessed_letters() {
        let mut keyboard = Keyboard::new();
        let (guess, feedback) = scored("crane", "trace");
        keyboard.record(&guess, &feedback);

        assert_eq!(keyboard.status_of(b't'), LetterStatus::Absent);
        assert_eq!(keyboard.status_of(b'r'), LetterStatus::Correct);
        assert_eq!(keyboard.status_of(b'a'), LetterStatus::Correct);
        assert_eq!(keyboard.status_of(b'c'), LetterStatus::Present);
        assert_eq!(keyboard.status_of(b'e'), LetterStatus::Correct);
        assert_eq!(keyboard.status_of(b'z'), LetterStatus::Unknown);
    }

    #[test]
    fn never_downgrades_a_letter() {
        let mut keyboard = Keyboard::new();

        // CRANE vs CLOSE: C correct, E correct
        let (guess, feedback) = scored("crane", "close");
        keyboard.record(&guess, &feedback);
        assert_eq!(keyboard.status_of(b'c'), LetterStatus::Correct);
        assert_eq!(keyboard.status_of(b'e'), LetterStatus::Correct);

        // CRANE vs ERASE: the surplus trailing E scores Absent, but the
        // keyboard must keep E at Correct.
        let (guess, feedback) = scored("crane", "erase");
        keyboard.record(&guess, &feedback);
        assert_eq!(keyboard.status_of(b'e'), LetterStatus::Correct);
    }

    #[test]
    fn upgrades_present_to_correct() {
        let mut keyboard = Keyboard::new();

        // E is present but misplaced
        let (guess, feedback) = scored("crane", "beast");
        keyboard.record(&guess, &feedback);
        assert_eq!(keyboard.status_of(b'e'), LetterStatus::Present);

        // Now E lands in the right spot
        let (guess, feedback) = scored("crane", "slate");
        keyboard.record(&guess, &feedback);
        assert_eq!(keyboard.status_of(b'e'), LetterStatus::Correct);
    }

    #[test]
    fn record_is_idempotent() {
        let mut keyboard = Keyboard::new();
        let (guess, feedback) = scored("crane", "trace");

        keyboard.record(&guess, &feedback);
        let snapshot = keyboard.clone();
        keyboard.record(&guess, &feedback);

        assert_eq!(keyboard, snapshot);
    }

    #[test]
    fn status_of_non_letter_is_unknown() {
        let keyboard = Keyboard::new();
        assert_eq!(keyboard.status_of(b'1'), LetterStatus::Unknown);
        assert_eq!(keyboard.status_of(b'A'), LetterStatus::Unknown);
    }
}
