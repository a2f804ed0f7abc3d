//! Command implementations

pub mod share;
pub mod simple;
pub mod today;

pub use share::share_today;
pub use simple::run_simple;
pub use today::{Progress, TodayInfo, today_info};

use crate::config::GameConfig;
use crate::errors::ConfigError;
use crate::game::{DailyPuzzle, GameSession, Puzzle};
use crate::storage::{Storage, restore_session};
use crate::wordlists::WordList;
use chrono::NaiveDate;
use tracing::debug;

/// Everything a command needs to open today's puzzle
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub words: WordList,
    /// Local date the daily puzzle is taken from
    pub date: NaiveDate,
}

impl Game {
    /// # Errors
    /// The configured word list cannot be built.
    pub fn new(config: GameConfig, date: NaiveDate) -> Result<Self, ConfigError> {
        let words = config.word_list()?;
        debug!(words = words.len(), %date, "game ready");
        Ok(Self {
            config,
            words,
            date,
        })
    }

    #[must_use]
    pub fn daily_puzzle(&self) -> DailyPuzzle {
        DailyPuzzle::for_date(self.date, self.config.start_date, &self.words)
    }

    /// Today's puzzle, or a random one for practice
    #[must_use]
    pub fn puzzle(&self, practice: bool) -> Puzzle {
        if practice {
            Puzzle::practice(&self.words, &mut rand::rng())
        } else {
            self.daily_puzzle().into()
        }
    }

    /// The saved session for `puzzle`, or a fresh one
    #[must_use]
    pub fn open_session(&self, storage: &dyn Storage, puzzle: Puzzle) -> GameSession {
        restore_session(storage, puzzle, self.config.rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(date: NaiveDate) -> Game {
        let config = GameConfig {
            words: Some(vec!["PYTHON".to_owned(), "LIMACE".to_owned()]),
            ..GameConfig::default()
        };
        Game::new(config, date).unwrap()
    }

    #[test]
    fn daily_puzzle_follows_the_date() {
        let game = game(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        let puzzle = game.daily_puzzle();
        assert_eq!(puzzle.day_index, 1);
        assert_eq!(puzzle.secret.text(), "LIMACE");
    }

    #[test]
    fn practice_puzzle_has_no_day() {
        let game = game(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(game.puzzle(true).day_index(), None);
        assert_eq!(game.puzzle(false).day_index(), Some(1));
    }
}
