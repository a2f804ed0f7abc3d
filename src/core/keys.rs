//! Keyboard feedback aggregation
//!
//! Each letter keeps the best state it has ever received. The aggregate is a
//! plain fold over the scored rows, so it can always be rebuilt from the grid.

use super::{Cell, CellState, Feedback, Word};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best known state per letter
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyStates(BTreeMap<char, CellState>);

impl KeyStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the aggregate from scored grid rows
    ///
    /// Cells without a letter or without feedback are skipped.
    #[must_use]
    pub fn from_rows<'a, R>(rows: R) -> Self
    where
        R: IntoIterator<Item = &'a [Cell]>,
    {
        let mut keys = Self::new();
        for row in rows {
            for cell in row {
                if let Some(letter) = cell.letter {
                    keys.merge(letter, cell.state);
                }
            }
        }
        keys
    }

    /// State shown for a key, `Empty` when the letter was never played
    #[must_use]
    pub fn get(&self, letter: char) -> CellState {
        self.0
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Fold one observation into the aggregate
    ///
    /// `Empty` observations are ignored. Returns whether the letter's state
    /// changed.
    pub fn merge(&mut self, letter: char, state: CellState) -> bool {
        if !state.is_resolved() {
            return false;
        }

        let letter = letter.to_ascii_uppercase();
        let previous = self.0.get(&letter).copied();
        let merged = CellState::merge(previous, state);
        self.0.insert(letter, merged);

        previous != Some(merged)
    }

    /// Fold a scored guess into the aggregate
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (letter, &state) in guess.chars().zip(feedback.states()) {
            self.merge(letter, state);
        }
    }

    /// Combine with another aggregate, keeping the best state of each letter
    #[must_use]
    pub fn union(mut self, other: &Self) -> Self {
        for (letter, state) in other.iter() {
            self.merge(letter, state);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, CellState)> + '_ {
        self.0.iter().map(|(&letter, &state)| (letter, state))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
