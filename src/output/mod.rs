//! Terminal output formatting
//!
//! Colored tiles for the line-mode game, command reports and share text.

pub mod display;
pub mod formatters;
pub mod share;

pub use display::{print_board, print_keyboard, print_today};
pub use share::share_text;
