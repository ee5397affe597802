//! The per-game state machine
//!
//! A [`GameSession`] owns one secret word and accepts guesses until the
//! player finds it or runs out of attempts. Validation happens strictly
//! before any mutation: a rejected submission leaves the history, keyboard,
//! and attempt budget untouched.

use super::Keyboard;
use crate::core::{Feedback, LetterStatus, Word, WordError};
use crate::wordlists::WordSource;
use std::fmt;

/// Standard attempt budget
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// One accepted guess and its scoring, immutable once recorded
#[derive(Debug, Clone)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    /// The guessed word
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The per-position scoring of the word
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Iterate `(letter, status)` pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.statuses().iter().copied())
    }
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guesses are still being accepted
    InProgress,
    /// A guess matched the secret
    Won,
    /// The attempt budget ran out without a match
    Lost,
}

impl Outcome {
    /// True once the session no longer accepts guesses
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a submission was rejected
///
/// `InvalidLength` and `UnknownWord` are ordinary player mistakes and cost
/// nothing. `SessionOver` is a sequencing bug in the caller: the loop kept
/// submitting after the game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidLength(usize),
    UnknownWord(String),
    SessionOver(Outcome),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Guess must be exactly {} letters, got {len}",
                crate::core::WORD_LENGTH
            ),
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word list"),
            Self::SessionOver(outcome) => {
                write!(f, "Session already finished ({outcome:?}), no more guesses accepted")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// One game: a secret word, the guesses made so far, and the outcome
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    history: Vec<Guess>,
    keyboard: Keyboard,
    max_guesses: usize,
    outcome: Outcome,
}

impl GameSession {
    /// Start a session with the standard six-guess budget
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_max_guesses(secret, DEFAULT_MAX_GUESSES)
    }

    /// Start a session with a custom attempt budget
    #[must_use]
    pub fn with_max_guesses(secret: Word, max_guesses: usize) -> Self {
        Self {
            secret,
            history: Vec::with_capacity(max_guesses),
            keyboard: Keyboard::new(),
            max_guesses,
            outcome: Outcome::InProgress,
        }
    }

    /// Submit a raw guess string
    ///
    /// On success the guess is scored, appended to history, merged into the
    /// keyboard, and the win/loss transition is checked. Returns the recorded
    /// guess so callers can render it.
    ///
    /// # Errors
    /// - [`GameError::SessionOver`] if the session is already terminal
    /// - [`GameError::InvalidLength`] if the string is not exactly five letters
    /// - [`GameError::UnknownWord`] if the word list does not accept it
    ///
    /// Rejected submissions never consume an attempt.
    pub fn submit_guess<S: WordSource + ?Sized>(
        &mut self,
        raw: &str,
        words: &S,
    ) -> Result<&Guess, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::SessionOver(self.outcome));
        }

        let word = Word::new(raw).map_err(|e| match e {
            WordError::InvalidLength(len) => GameError::InvalidLength(len),
            // Malformed characters can never be in the word list
            WordError::NonAscii | WordError::InvalidCharacters => {
                GameError::UnknownWord(raw.to_string())
            }
        })?;

        if !words.is_accepted(&word) {
            return Err(GameError::UnknownWord(word.text().to_string()));
        }

        let feedback = Feedback::evaluate(&self.secret, &word);
        self.keyboard.record(&word, &feedback);
        self.history.push(Guess { word, feedback });

        if feedback.is_win() {
            self.outcome = Outcome::Won;
        } else if self.history.len() >= self.max_guesses {
            self.outcome = Outcome::Lost;
        }

        Ok(self.history.last().expect("guess just appended"))
    }

    /// The secret word (for revealing after a loss)
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// All accepted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.history
    }

    /// Number of attempts used so far
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Attempts still available
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    /// The session's attempt budget
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Current state of the win/loss machine
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Aggregated letter knowledge across all guesses
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts any well-formed word; tests don't need the real lists
    struct AnyWord;

    impl WordSource for AnyWord {
        fn pick_secret(&self) -> Word {
            Word::new("crane").unwrap()
        }

        fn is_accepted(&self, _word: &Word) -> bool {
            true
        }
    }

    /// Rejects everything, for exercising the unknown-word path
    struct NoWords;

    impl WordSource for NoWords {
        fn pick_secret(&self) -> Word {
            Word::new("crane").unwrap()
        }

        fn is_accepted(&self, _word: &Word) -> bool {
            false
        }
    }

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap())
    }

    #[test]
    fn correct_first_guess_wins() {
        let mut game = session("crane");
        let guess = game.submit_guess("crane", &AnyWord).unwrap();

        assert!(guess.feedback().is_win());
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn wrong_guesses_until_loss() {
        let mut game = session("crane");

        for i in 1..=DEFAULT_MAX_GUESSES {
            assert_eq!(game.outcome(), Outcome::InProgress);
            game.submit_guess("slate", &AnyWord).unwrap();
            assert_eq!(game.guess_count(), i);
        }

        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.remaining_guesses(), 0);
    }

    #[test]
    fn win_on_final_attempt() {
        let mut game = session("crane");

        for _ in 0..DEFAULT_MAX_GUESSES - 1 {
            game.submit_guess("slate", &AnyWord).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::InProgress);

        game.submit_guess("crane", &AnyWord).unwrap();
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn invalid_length_costs_nothing() {
        let mut game = session("crane");

        for _ in 0..10 {
            let err = game.submit_guess("cranes", &AnyWord).unwrap_err();
            assert_eq!(err, GameError::InvalidLength(6));
        }

        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn unknown_word_costs_nothing() {
        let mut game = session("crane");

        let err = game.submit_guess("slate", &NoWords).unwrap_err();
        assert_eq!(err, GameError::UnknownWord("slate".to_string()));
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn malformed_guess_rejected_as_unknown() {
        let mut game = session("crane");

        let err = game.submit_guess("cr4n3", &AnyWord).unwrap_err();
        assert_eq!(err, GameError::UnknownWord("cr4n3".to_string()));
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn submitting_after_win_is_an_error() {
        let mut game = session("crane");
        game.submit_guess("crane", &AnyWord).unwrap();

        let err = game.submit_guess("slate", &AnyWord).unwrap_err();
        assert_eq!(err, GameError::SessionOver(Outcome::Won));
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn submitting_after_loss_is_an_error() {
        let mut game = GameSession::with_max_guesses(Word::new("crane").unwrap(), 1);
        game.submit_guess("slate", &AnyWord).unwrap();
        assert_eq!(game.outcome(), Outcome::Lost);

        let err = game.submit_guess("crane", &AnyWord).unwrap_err();
        assert_eq!(err, GameError::SessionOver(Outcome::Lost));
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn keyboard_tracks_guesses() {
        let mut game = session("crane");
        game.submit_guess("trace", &AnyWord).unwrap();

        assert_eq!(game.keyboard().status_of(b'r'), LetterStatus::Correct);
        assert_eq!(game.keyboard().status_of(b'c'), LetterStatus::Present);
        assert_eq!(game.keyboard().status_of(b't'), LetterStatus::Absent);
        assert_eq!(game.keyboard().status_of(b'q'), LetterStatus::Unknown);
    }

    #[test]
    fn history_preserves_order_and_feedback() {
        let mut game = session("crane");
        game.submit_guess("slate", &AnyWord).unwrap();
        game.submit_guess("trace", &AnyWord).unwrap();

        let guesses = game.guesses();
        assert_eq!(guesses.len(), 2);
        assert_eq!(guesses[0].word().text(), "slate");
        assert_eq!(guesses[1].word().text(), "trace");
        assert_eq!(guesses[1].feedback().count_correct(), 3);
    }

    #[test]
    fn normalizes_case_before_matching() {
        let mut game = session("crane");
        game.submit_guess("CRANE", &AnyWord).unwrap();
        assert_eq!(game.outcome(), Outcome::Won);
    }
}
