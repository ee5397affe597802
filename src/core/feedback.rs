//! Per-letter guess feedback
//!
//! [`LetterStatus`] is the four-valued feedback a letter can carry, ordered by
//! specificity so that keyboard aggregation can merge with a plain `max`:
//! `Unknown < Absent < Present < Correct`.
//!
//! [`Feedback`] is the full per-position result of scoring one guess against
//! the secret, computed with the standard two-pass rule so duplicate letters
//! are never over-credited.

use super::{WORD_LENGTH, Word};

/// Best-known knowledge about a single letter
///
/// The derived ordering follows declaration order, which is exactly the
/// specificity ordering the keyboard merge relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter has not appeared in any guess yet
    #[default]
    Unknown,
    /// Letter is not in the secret (or all its copies are spoken for)
    Absent,
    /// Letter is in the secret, but at a different position
    Present,
    /// Letter is in the secret at exactly this position
    Correct,
}

/// Feedback for one scored guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions correct (a winning guess)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// Both words are already validated to the fixed length, so this is total:
    /// every position receives a status and there is no error path.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and consume that
    ///    letter from the secret's letter multiset, so a later out-of-place
    ///    copy cannot claim it again.
    /// 2. Second pass, left to right: a position not already `Correct` becomes
    ///    `Present` while the multiset still holds an unconsumed copy of its
    ///    letter (consuming one), otherwise `Absent`.
    ///
    /// The left-to-right order in the second pass is what makes duplicate
    /// resolution deterministic: when the guess repeats a letter more often
    /// than the secret contains it, the earliest unmatched copies win.
    ///
    /// # Examples
    /// ```
    /// use terminal_wordle::core::{Feedback, LetterStatus, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// // T(absent) R(correct) A(correct) C(present) E(correct)
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[
    ///         LetterStatus::Absent,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Present,
    ///         LetterStatus::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut available = secret.letter_counts();

        // First pass: exact matches claim their letter from the pool
        // Allow: Index needed to access guess[i], secret[i], and set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == secret.letter_at(i) {
                statuses[i] = LetterStatus::Correct;

                if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, while unconsumed copies remain
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if statuses[i] != LetterStatus::Correct {
                let letter = guess.letter_at(i);
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    statuses[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self(statuses)
    }

    /// Get the per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Get the status at a position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check whether every position is correct (a winning guess)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0 == [LetterStatus::Correct; WORD_LENGTH]
    }

    /// Count the positions marked `Correct`
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Correct)
            .count()
    }

    /// Count the positions marked `Present`
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Present)
            .count()
    }
}
