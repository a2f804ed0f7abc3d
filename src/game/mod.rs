//! Game state: puzzles, the grid, sessions and their reveal animation

pub mod grid;
pub mod puzzle;
pub mod reveal;
pub mod session;

pub use grid::Grid;
pub use puzzle::{DailyPuzzle, Puzzle};
pub use reveal::{Board, DisplayCell, Generation, RevealEvent, RevealQueue};
pub use session::{GameSession, MAX_ATTEMPTS, Outcome, Rules, Status, Submission};
