//! Core domain types for the word game
//!
//! This module contains the pure scoring types: words, cells, per-guess
//! feedback and the keyboard aggregate. Nothing here does I/O.

mod cell;
mod feedback;
mod keys;
mod word;

pub use cell::{Cell, CellState};
pub use feedback::{Feedback, LengthMismatch};
pub use keys::KeyStates;
pub use word::{Word, WordError};
