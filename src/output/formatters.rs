//! Formatting utilities for terminal output

use crate::core::{Cell, CellState};
use colored::{ColoredString, Colorize};

/// French keyboard layout, top row first
pub const AZERTY_ROWS: [&str; 3] = ["AZERTYUIOP", "QSDFGHJKLM", "WXCVBN"];

/// Share glyph of a scored cell
///
/// On the board a misplaced letter is a yellow circle on a blue tile. No
/// single emoji carries both colours, so the share text keeps the circle 🟡
/// and relies on the surrounding 🟦 cells for the tile colour.
#[must_use]
pub const fn state_glyph(state: CellState) -> char {
    match state {
        CellState::Correct => '🟥',
        CellState::Present => '🟡',
        CellState::Absent => '🟦',
        CellState::Empty => '⬜',
    }
}

/// Format a scored row as share glyphs
#[must_use]
pub fn row_to_glyphs(row: &[Cell]) -> String {
    row.iter().map(|cell| state_glyph(cell.state)).collect()
}

/// One letter tile colored by its state
#[must_use]
pub fn colored_letter(letter: char, state: CellState) -> ColoredString {
    let tile = format!(" {letter} ");
    match state {
        CellState::Correct => tile.white().bold().on_red(),
        CellState::Present => tile.black().bold().on_yellow(),
        CellState::Absent => tile.white().on_blue(),
        CellState::Empty => tile.bright_black(),
    }
}
