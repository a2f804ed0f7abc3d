//! Saved-game JSON document
//!
//! Every field is optional on load. A snapshot is only turned back into a
//! session when it was saved for the same secret word, and only when its
//! grid and attempt counter fit that word.

use crate::core::{Cell, CellState, KeyStates};
use crate::errors::StorageError;
use crate::game::{GameSession, Grid, MAX_ATTEMPTS, Puzzle, Rules};
use crate::game::session::SessionParts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub secret_word: Option<String>,
    pub grid: Option<Vec<Vec<Cell>>>,
    pub current_attempt: usize,
    pub current_input_buffer: String,
    pub game_over: bool,
    pub has_won: bool,
    pub status_message: String,
    pub key_states: KeyStates,
    pub last_revealed_row: Option<usize>,
    pub known_correct_by_position: Vec<Option<char>>,
}

impl Snapshot {
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            secret_word: Some(session.secret().text().to_owned()),
            grid: Some(session.grid().rows().map(<[Cell]>::to_vec).collect()),
            current_attempt: session.current_attempt(),
            current_input_buffer: session.input().to_owned(),
            game_over: session.is_over(),
            has_won: session.has_won(),
            status_message: session.status_message().to_owned(),
            key_states: session.key_states().clone(),
            last_revealed_row: session.last_revealed_row(),
            known_correct_by_position: session.known_correct().to_vec(),
        }
    }

    /// Rebuild a session for `puzzle`
    ///
    /// Returns `Ok(None)` when the snapshot belongs to another word.
    ///
    /// # Errors
    /// `StorageError::Inconsistent` when the grid shape or the attempt
    /// counter cannot belong to a game of this word, or when the scored rows
    /// are not exactly the ones before the attempt counter.
    pub fn into_session(
        self,
        puzzle: Puzzle,
        rules: Rules,
    ) -> Result<Option<GameSession>, StorageError> {
        let secret = puzzle.secret();
        if self.secret_word.as_deref() != Some(secret.text()) {
            return Ok(None);
        }

        let width = secret.len();
        let grid = match self.grid {
            Some(rows) => Grid::from_rows(rows),
            None => Grid::new(MAX_ATTEMPTS, width),
        };
        if !grid.fits(MAX_ATTEMPTS, width) {
            return Err(StorageError::Inconsistent(format!(
                "grid is not {MAX_ATTEMPTS} rows of {width} cells"
            )));
        }

        if self.current_attempt > MAX_ATTEMPTS
            || (self.current_attempt == MAX_ATTEMPTS && !self.game_over)
        {
            return Err(StorageError::Inconsistent(format!(
                "attempt {} out of range",
                self.current_attempt
            )));
        }

        let played = if self.game_over {
            self.current_attempt + 1
        } else {
            self.current_attempt
        };
        if let Some(row) = misplaced_row(&grid, played) {
            return Err(StorageError::Inconsistent(format!(
                "row {row} does not match attempt {}",
                self.current_attempt
            )));
        }

        let key_states = self.key_states.union(&grid.key_states());
        let known_correct = known_correct(&grid, secret.first_letter(), width)
            .into_iter()
            .enumerate()
            .map(|(position, known)| {
                known.or_else(|| {
                    self.known_correct_by_position
                        .get(position)
                        .copied()
                        .flatten()
                        .filter(char::is_ascii_uppercase)
                })
            })
            .collect();

        let input = if self.game_over {
            String::new()
        } else {
            self.current_input_buffer
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|ch| ch.to_ascii_uppercase())
                .take(width)
                .collect()
        };

        let parts = SessionParts {
            grid,
            current_attempt: self.current_attempt,
            input,
            game_over: self.game_over,
            has_won: self.game_over && self.has_won,
            status_message: self.status_message,
            key_states,
            known_correct,
            last_revealed_row: self.last_revealed_row.filter(|&row| row < MAX_ATTEMPTS),
        };

        Ok(Some(GameSession::from_parts(puzzle, rules, parts)))
    }
}

/// First row breaking "the first `played` rows are scored, the rest empty"
fn misplaced_row(grid: &Grid, played: usize) -> Option<usize> {
    grid.rows().enumerate().find_map(|(index, row)| {
        let fits = if index < played {
            row.iter()
                .all(|cell| cell.letter.is_some() && cell.state.is_resolved())
        } else {
            row.iter().all(|cell| *cell == Cell::EMPTY)
        };
        (!fits).then_some(index)
    })
}

fn known_correct(grid: &Grid, first: char, width: usize) -> Vec<Option<char>> {
    let mut known = vec![None; width];
    known[0] = Some(first);

    for row in grid.rows() {
        for (position, cell) in row.iter().enumerate() {
            if cell.state == CellState::Correct
                && let Some(letter) = cell.letter
            {
                known[position] = Some(letter);
            }
        }
    }

    known
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use pretty_assertions::assert_eq;

    fn puzzle(secret: &str) -> Puzzle {
        Puzzle::Practice(Word::new(secret).unwrap())
    }

    fn played() -> GameSession {
        let session = GameSession::new(puzzle("LIMACE"), Rules::default())
            .submit("LIMITE")
            .unwrap()
            .session;
        session.with_letter('l').with_letter('a')
    }

    #[test]
    fn round_trip_restores_the_same_session() {
        let session = played();
        let json = serde_json::to_string(&Snapshot::from_session(&session)).unwrap();
        let snapshot: Snapshot = serde_json::from_str(&json).unwrap();

        let restored = snapshot
            .into_session(puzzle("LIMACE"), Rules::default())
            .unwrap()
            .unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn uses_camel_case_keys() {
        let value = serde_json::to_value(Snapshot::from_session(&played())).unwrap();

        assert_eq!(value["secretWord"], "LIMACE");
        assert_eq!(value["currentAttempt"], 1);
        assert_eq!(value["currentInputBuffer"], "LA");
        assert_eq!(value["gameOver"], false);
        assert_eq!(value["lastRevealedRow"], 0);
        assert_eq!(value["keyStates"]["T"], "absent");
        assert_eq!(value["knownCorrectByPosition"][1], "I");
        assert_eq!(value["knownCorrectByPosition"][3], serde_json::Value::Null);
        assert_eq!(value["grid"][0][0]["letter"], "L");
        assert_eq!(value["grid"][1][0]["letter"], "");
        assert_eq!(value["grid"][1][0]["state"], "empty");
    }

    #[test]
    fn other_secret_is_discarded() {
        let snapshot = Snapshot::from_session(&played());
        let restored = snapshot.into_session(puzzle("PIMENT"), Rules::default());
        assert!(matches!(restored, Ok(None)));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"secretWord":"LIMACE"}"#).unwrap();
        let restored = snapshot
            .into_session(puzzle("LIMACE"), Rules::default())
            .unwrap()
            .unwrap();

        assert_eq!(restored, GameSession::new(puzzle("LIMACE"), Rules::default()));
    }

    #[test]
    fn empty_document_has_no_secret() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            snapshot.into_session(puzzle("LIMACE"), Rules::default()),
            Ok(None)
        ));
    }

    #[test]
    fn wrong_grid_shape_is_inconsistent() {
        let mut snapshot = Snapshot::from_session(&played());
        snapshot.grid = Some(vec![vec![Cell::EMPTY; 5]; MAX_ATTEMPTS]);

        assert!(matches!(
            snapshot.into_session(puzzle("LIMACE"), Rules::default()),
            Err(StorageError::Inconsistent(_))
        ));
    }

    #[test]
    fn attempt_past_the_grid_is_inconsistent() {
        let mut snapshot = Snapshot::from_session(&played());
        snapshot.current_attempt = MAX_ATTEMPTS;

        assert!(matches!(
            snapshot.into_session(puzzle("LIMACE"), Rules::default()),
            Err(StorageError::Inconsistent(_))
        ));
    }

    #[test]
    fn scored_rows_past_the_attempt_are_inconsistent() {
        let session = played().submit("LAPINS").unwrap().session;
        let mut snapshot = Snapshot::from_session(&session);
        snapshot.current_attempt = 0;

        assert!(matches!(
            snapshot.into_session(puzzle("LIMACE"), Rules::default()),
            Err(StorageError::Inconsistent(_))
        ));
    }

    #[test]
    fn unscored_row_before_the_attempt_is_inconsistent() {
        let mut snapshot = Snapshot::from_session(&played());
        snapshot.current_attempt = 2;

        assert!(matches!(
            snapshot.into_session(puzzle("LIMACE"), Rules::default()),
            Err(StorageError::Inconsistent(_))
        ));
    }

    #[test]
    fn finished_game_keeps_its_final_row() {
        let won = played().submit("LIMACE").unwrap().session;
        let snapshot = Snapshot::from_session(&won);
        let restored = snapshot
            .into_session(puzzle("LIMACE"), Rules::default())
            .unwrap()
            .unwrap();

        assert_eq!(restored, won);
        assert_eq!(restored.grid().played_rows().count(), restored.attempts_used());
    }

    #[test]
    fn restored_key_states_match_the_grid_after_next_guess() {
        let session = played().submit("LAPINS").unwrap().session;
        let snapshot = Snapshot::from_session(&session);
        let restored = snapshot
            .into_session(puzzle("LIMACE"), Rules::default())
            .unwrap()
            .unwrap();
        let won = restored.submit("LIMACE").unwrap().session;

        assert_eq!(won.key_states(), &won.grid().key_states());
    }

    #[test]
    fn derived_fields_are_rebuilt_from_the_grid() {
        let session = played();
        let mut snapshot = Snapshot::from_session(&session);
        snapshot.key_states = KeyStates::new();
        snapshot.known_correct_by_position = Vec::new();
        snapshot.current_input_buffer = "l4a!".to_owned();

        let restored = snapshot
            .into_session(puzzle("LIMACE"), Rules::default())
            .unwrap()
            .unwrap();
        assert_eq!(restored.key_states(), session.key_states());
        assert_eq!(restored.known_correct(), session.known_correct());
        assert_eq!(restored.input(), "LA");
    }
}
