//! Summary of today's puzzle

use super::Game;
use crate::game::{GameSession, Status};
use crate::storage::Storage;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    NotStarted,
    InProgress { attempts_used: usize },
    Won { attempts_used: usize },
    Lost,
}

impl Progress {
    #[must_use]
    pub fn of(session: &GameSession) -> Self {
        match session.status() {
            Status::Won => Self::Won {
                attempts_used: session.attempts_used(),
            },
            Status::Lost => Self::Lost,
            Status::Active { attempt: 0 } => Self::NotStarted,
            Status::Active { attempt } => Self::InProgress {
                attempts_used: attempt,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayInfo {
    pub date: NaiveDate,
    pub day_index: i64,
    pub number: i64,
    pub length: usize,
    /// Given to the player when the first letter is locked
    pub first_letter: Option<char>,
    pub progress: Progress,
}

/// Describe today's puzzle and the saved progress on it
#[must_use]
pub fn today_info(game: &Game, storage: &dyn Storage) -> TodayInfo {
    let puzzle = game.daily_puzzle();
    let session = game.open_session(storage, puzzle.clone().into());

    TodayInfo {
        date: game.date,
        day_index: puzzle.day_index,
        number: puzzle.number(),
        length: puzzle.secret.len(),
        first_letter: game
            .config
            .lock_first_letter
            .then(|| puzzle.secret.first_letter()),
        progress: Progress::of(&session),
    }
}
