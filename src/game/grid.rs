//! The attempt grid

use crate::core::{Cell, KeyStates};
use serde::{Deserialize, Serialize};

/// `attempts` rows of `width` cells
///
/// Updates are structural: [`Grid::with_row`] returns a new grid and leaves
/// `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// An all-empty grid
    #[must_use]
    pub fn new(attempts: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![Cell::EMPTY; width]; attempts],
        }
    }

    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Whether every row has exactly `width` cells and there are `attempts` rows
    #[must_use]
    pub fn fits(&self, attempts: usize, width: usize) -> bool {
        self.rows.len() == attempts && self.rows.iter().all(|row| row.len() == width)
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Rows whose cells all carry feedback
    pub fn played_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows()
            .filter(|row| !row.is_empty() && row.iter().all(|cell| cell.state.is_resolved()))
    }

    /// Key states recomputed from every scored cell
    #[must_use]
    pub fn key_states(&self) -> KeyStates {
        KeyStates::from_rows(self.rows())
    }

    /// A copy of the grid with row `index` replaced
    #[must_use]
    pub fn with_row(&self, index: usize, cells: Vec<Cell>) -> Self {
        let mut rows = self.rows.clone();
        if let Some(row) = rows.get_mut(index) {
            *row = cells;
        }
        Self { rows }
    }
}
