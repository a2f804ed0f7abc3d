//! SUTOM perso
//!
//! A daily word game in the style of SUTOM: one secret word per calendar day,
//! six attempts, the first letter given, red tiles for well placed letters.
//!
//! # Quick Start
//!
//! ```rust
//! use sutom_daily::core::{CellState, Feedback, Word};
//!
//! let guess = Word::new("limite").unwrap();
//! let secret = Word::new("limace").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret).unwrap();
//! assert_eq!(feedback.count_correct(), 4);
//! assert_eq!(feedback.states()[3], CellState::Absent);
//! ```

// Core domain types
pub mod core;

// Daily word selection
pub mod daily;

// Session state machine and reveal animation
pub mod game;

// Saved games
pub mod storage;

// Word lists
pub mod wordlists;

pub mod config;
pub mod errors;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
