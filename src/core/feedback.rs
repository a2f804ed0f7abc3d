//! Guess scoring
//!
//! Feedback is the per-position classification of a guess against the secret
//! word, following the classic rules:
//! - `Correct`: letter at the right position
//! - `Present`: letter elsewhere in the word
//! - `Absent`: letter not in the word, or every occurrence already claimed
//!
//! Duplicate letters are handled fairly: a letter never collects more
//! `Correct`/`Present` marks than it has occurrences in the secret.

use super::{CellState, Word};
use thiserror::Error;

/// Scoring requires equal-length words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("guess has {guess} letters but the secret word has {secret}")]
pub struct LengthMismatch {
    pub guess: usize,
    pub secret: usize,
}

/// Feedback for one guess, one state per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<CellState>);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and remove them from the
    ///    working multiset of the secret's letters
    /// 2. Second pass: for every other position, mark present if the letter is
    ///    still in the multiset (consuming one occurrence), absent otherwise
    ///
    /// # Errors
    /// Returns `LengthMismatch` when the words differ in length; such a guess is
    /// never scored.
    ///
    /// # Examples
    /// ```
    /// use sutom_daily::core::{CellState::*, Feedback, Word};
    ///
    /// let secret = Word::new("LIMACE").unwrap();
    /// let guess = Word::new("LIMITE").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    ///
    /// assert_eq!(
    ///     feedback.states(),
    ///     &[Correct, Correct, Correct, Absent, Absent, Correct]
    /// );
    /// ```
    pub fn calculate(guess: &Word, secret: &Word) -> Result<Self, LengthMismatch> {
        if guess.len() != secret.len() {
            return Err(LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        let guess_letters = guess.letters();
        let secret_letters = secret.letters();
        let mut result = vec![CellState::Absent; secret.len()];
        let mut secret_available = secret.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
            if g == s {
                result[i] = CellState::Correct;

                if let Some(count) = secret_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess_letters.iter().enumerate() {
            if result[i] == CellState::Correct {
                continue;
            }

            if let Some(count) = secret_available.get_mut(&g)
                && *count > 0
            {
                result[i] = CellState::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// The states, in letter order
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[CellState] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&state| state == CellState::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(CellState::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(CellState::Present)
    }

    fn count(&self, wanted: CellState) -> usize {
        self.0.iter().filter(|&&state| state == wanted).count()
    }
}

impl From<Feedback> for Vec<CellState> {
    fn from(feedback: Feedback) -> Self {
        feedback.0
    }
}
