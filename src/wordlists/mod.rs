//! Word lists and secret selection
//!
//! The game engine only needs two operations from a word list: pick a secret
//! and decide whether a guess is a legal word. [`WordSource`] is that seam,
//! and [`Dictionary`] is the standard implementation: secrets come from a
//! curated answer list, guesses are checked against a larger accepted set
//! held in a hash set so lookup never scans.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// What the engine consumes from a word list
pub trait WordSource {
    /// Pick a secret word for a new session
    fn pick_secret(&self) -> Word;

    /// Whether the word is a legal guess
    fn is_accepted(&self, word: &Word) -> bool;
}

/// Error building a [`Dictionary`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No valid answer words, so no secret could ever be picked
    NoAnswers,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Word list contains no valid answer words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Answer list plus accepted-guess set
///
/// Invariant: `answers` is non-empty and every answer is in `accepted`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from answer words and additional accepted guesses
    ///
    /// Answers are always accepted as guesses, whether or not they appear in
    /// `allowed`.
    ///
    /// # Errors
    /// Returns [`DictionaryError::NoAnswers`] if `answers` is empty.
    pub fn new(answers: Vec<Word>, allowed: &[Word]) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let mut accepted: FxHashSet<String> =
            allowed.iter().map(|w| w.text().to_string()).collect();
        accepted.extend(answers.iter().map(|w| w.text().to_string()));

        Ok(Self { answers, accepted })
    }

    /// Build the standard dictionary from the embedded lists
    ///
    /// # Panics
    /// Will not panic - the embedded answer list is generated non-empty at
    /// build time.
    #[must_use]
    pub fn embedded() -> Self {
        let answers = loader::words_from_slice(ANSWERS);
        let allowed = loader::words_from_slice(ALLOWED);
        Self::new(answers, &allowed).expect("embedded answer list is non-empty")
    }

    /// Number of possible secrets
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of distinct accepted guesses
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

impl WordSource for Dictionary {
    fn pick_secret(&self) -> Word {
        // Non-empty by construction
        let index = rand::rng().random_range(0..self.answers.len());
        self.answers[index].clone()
    }

    fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for &answer in ANSWERS {
            assert!(
                allowed_set.contains(&answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn embedded_dictionary_accepts_answers_and_extras() {
        let dictionary = Dictionary::embedded();

        assert!(dictionary.is_accepted(&Word::new("crane").unwrap()));
        assert!(dictionary.is_accepted(&Word::new("level").unwrap()));
        // Guess-only word
        assert!(dictionary.is_accepted(&Word::new("which").unwrap()));
        // Well-formed but not in any list
        assert!(!dictionary.is_accepted(&Word::new("zzzzz").unwrap()));
    }

    #[test]
    fn picked_secret_comes_from_answers() {
        let dictionary = Dictionary::embedded();

        for _ in 0..20 {
            let secret = dictionary.pick_secret();
            assert!(ANSWERS.contains(&secret.text()));
        }
    }

    #[test]
    fn empty_answers_rejected() {
        let allowed = [Word::new("crane").unwrap()];
        assert!(matches!(
            Dictionary::new(Vec::new(), &allowed),
            Err(DictionaryError::NoAnswers)
        ));
    }

    #[test]
    fn answers_always_accepted_even_without_allowed_entry() {
        let answers = vec![Word::new("crane").unwrap()];
        let dictionary = Dictionary::new(answers, &[]).unwrap();

        assert!(dictionary.is_accepted(&Word::new("crane").unwrap()));
        assert_eq!(dictionary.answer_count(), 1);
        assert_eq!(dictionary.accepted_count(), 1);
    }
}
