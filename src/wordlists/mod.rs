//! Word lists for the daily game
//!
//! Provides the embedded default list and the non-empty [`WordList`] every
//! daily puzzle is drawn from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::errors::ConfigError;

/// An ordered, non-empty list of candidate secret words
///
/// Day 0 maps to the first entry. Emptiness is rejected on construction, so
/// every lookup into the list is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a word list
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` when `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if the embedded list has no valid word.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a position already reduced modulo `len()`
    pub(crate) fn at(&self, index: usize) -> &Word {
        &self.words[index % self.words.len()]
    }
}
