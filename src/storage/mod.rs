//! Saved games
//!
//! The game talks to a key-value [`Storage`] it is handed at startup. One
//! JSON [`Snapshot`] is stored per puzzle day. Storage failures never stop
//! the game: a failed load starts a fresh session, a failed save is logged.

pub mod file;
pub mod memory;
pub mod snapshot;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use snapshot::Snapshot;

use crate::errors::StorageError;
use crate::game::{GameSession, Puzzle, Rules};
use tracing::{info, instrument, trace, warn};

/// String key-value store
pub trait Storage {
    /// # Errors
    /// The store could not be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// The store could not be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage key of a puzzle day
///
/// ```
/// assert_eq!(sutom_daily::storage::day_key(12), "sutom-perso/day-12");
/// ```
#[must_use]
pub fn day_key(day_index: i64) -> String {
    format!("sutom-perso/day-{day_index}")
}

/// Load the saved session for a daily puzzle
///
/// # Errors
/// The store failed, the document is malformed or it does not fit the puzzle.
pub fn load_session(
    storage: &dyn Storage,
    puzzle: &Puzzle,
    rules: Rules,
) -> Result<Option<GameSession>, StorageError> {
    let Some(day) = puzzle.day_index() else {
        return Ok(None);
    };

    let Some(json) = storage.load(&day_key(day))? else {
        return Ok(None);
    };

    let snapshot: Snapshot = serde_json::from_str(&json)?;
    snapshot.into_session(puzzle.clone(), rules)
}

/// Saved session for `puzzle`, or a fresh one
#[instrument(skip_all, fields(day = puzzle.day_index()))]
pub fn restore_session(storage: &dyn Storage, puzzle: Puzzle, rules: Rules) -> GameSession {
    match load_session(storage, &puzzle, rules) {
        Ok(Some(session)) => {
            info!(attempt = session.current_attempt(), over = session.is_over(), "restored saved game");
            session
        }
        Ok(None) => {
            info!("no saved game for this puzzle, starting fresh");
            GameSession::new(puzzle, rules)
        }
        Err(error) => {
            warn!(%error, "ignoring saved game");
            GameSession::new(puzzle, rules)
        }
    }
}

/// Write a daily session to the store
///
/// Practice sessions are not saved.
///
/// # Errors
/// The snapshot could not be encoded or written.
pub fn save_session(storage: &mut dyn Storage, session: &GameSession) -> Result<(), StorageError> {
    let Some(day) = session.puzzle().day_index() else {
        trace!("practice game, not saving");
        return Ok(());
    };

    let json = serde_json::to_string(&Snapshot::from_session(session))?;
    storage.save(&day_key(day), &json)
}

/// [`save_session`], logging instead of failing
#[instrument(skip_all, fields(day = session.puzzle().day_index()))]
pub fn persist_session(storage: &mut dyn Storage, session: &GameSession) {
    if let Err(error) = save_session(storage, session) {
        warn!(%error, "failed to save game");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::DailyPuzzle;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn daily(secret: &str) -> Puzzle {
        Puzzle::Daily(DailyPuzzle {
            day_index: 3,
            secret: Word::new(secret).unwrap(),
        })
    }

    fn played(puzzle: Puzzle) -> GameSession {
        GameSession::new(puzzle, Rules::default())
            .submit("LIMITE")
            .unwrap()
            .session
    }

    #[test]
    fn saved_game_is_restored() {
        let mut storage = MemoryStorage::new();
        let session = played(daily("LIMACE"));
        save_session(&mut storage, &session).unwrap();

        assert!(storage.get("sutom-perso/day-3").is_some());
        let restored = restore_session(&storage, daily("LIMACE"), Rules::default());
        assert_eq!(restored, session);
    }

    #[test]
    #[traced_test]
    fn mismatched_secret_starts_fresh() {
        let mut storage = MemoryStorage::new();
        persist_session(&mut storage, &played(daily("LIMACE")));

        let restored = restore_session(&storage, daily("LIMITE"), Rules::default());
        assert_eq!(restored, GameSession::new(daily("LIMITE"), Rules::default()));
        assert!(logs_contain("starting fresh"));
    }

    #[test]
    #[traced_test]
    fn malformed_json_starts_fresh() {
        let mut storage = MemoryStorage::new();
        storage.save(&day_key(3), "{not json").unwrap();

        let restored = restore_session(&storage, daily("LIMACE"), Rules::default());
        assert_eq!(restored.current_attempt(), 0);
        assert!(logs_contain("ignoring saved game"));
    }

    #[test]
    #[traced_test]
    fn load_failure_starts_fresh() {
        let mut storage = MemoryStorage::new();
        persist_session(&mut storage, &played(daily("LIMACE")));
        storage.fail_loads(true);

        let restored = restore_session(&storage, daily("LIMACE"), Rules::default());
        assert_eq!(restored.current_attempt(), 0);
        assert!(logs_contain("storage unavailable"));
    }

    #[test]
    #[traced_test]
    fn save_failure_is_logged_and_play_continues() {
        let mut storage = MemoryStorage::new();
        storage.fail_saves(true);

        let session = played(daily("LIMACE"));
        persist_session(&mut storage, &session);
        assert!(logs_contain("failed to save game"));

        let next = session.submit("LIMACE").unwrap().session;
        assert!(next.has_won());
        assert!(storage.is_empty());
    }

    #[test]
    fn practice_games_are_not_saved() {
        let mut storage = MemoryStorage::new();
        let practice = Puzzle::Practice(Word::new("LIMACE").unwrap());
        save_session(&mut storage, &played(practice.clone())).unwrap();

        assert!(storage.is_empty());
        assert_eq!(
            restore_session(&storage, practice.clone(), Rules::default()),
            GameSession::new(practice, Rules::default())
        );
    }
}
