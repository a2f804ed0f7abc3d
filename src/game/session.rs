//! Game session state machine
//!
//! A session moves through `Active(0) .. Active(MAX_ATTEMPTS - 1)` and ends in
//! `Won` or `Lost`. Every transition takes `&self` and returns a new session
//! value; the previous value is never modified, so a committed grid can be
//! held alongside an in-flight reveal without aliasing.

use super::{Grid, Puzzle};
use crate::core::{Cell, CellState, Feedback, KeyStates, Word};
use crate::errors::GuessError;
use tracing::debug;

/// Number of rows in the grid
pub const MAX_ATTEMPTS: usize = 6;

/// Gameplay policy knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Guesses must start with the secret's first letter, which is given
    pub lock_first_letter: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            lock_first_letter: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active { attempt: usize },
    Won,
    Lost,
}

/// What an accepted guess did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub session: GameSession,
    /// Row the guess was written to
    pub row: usize,
    pub feedback: Feedback,
    pub outcome: Outcome,
}

/// One player's game for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    puzzle: Puzzle,
    rules: Rules,
    grid: Grid,
    current_attempt: usize,
    input: String,
    game_over: bool,
    has_won: bool,
    status_message: String,
    key_states: KeyStates,
    known_correct: Vec<Option<char>>,
    last_revealed_row: Option<usize>,
}

/// Restored fields, validated by the caller against the puzzle
pub(crate) struct SessionParts {
    pub grid: Grid,
    pub current_attempt: usize,
    pub input: String,
    pub game_over: bool,
    pub has_won: bool,
    pub status_message: String,
    pub key_states: KeyStates,
    pub known_correct: Vec<Option<char>>,
    pub last_revealed_row: Option<usize>,
}

impl GameSession {
    /// A fresh session in `Active(0)`
    ///
    /// # Examples
    /// ```
    /// use sutom_daily::core::Word;
    /// use sutom_daily::game::{GameSession, Outcome, Puzzle, Rules, Status};
    ///
    /// let puzzle = Puzzle::Practice(Word::new("LIMACE").unwrap());
    /// let session = GameSession::new(puzzle, Rules::default());
    /// assert_eq!(session.status(), Status::Active { attempt: 0 });
    ///
    /// let submission = session.submit("limace").unwrap();
    /// assert_eq!(submission.outcome, Outcome::Won);
    /// assert_eq!(submission.session.status(), Status::Won);
    /// ```
    #[must_use]
    pub fn new(puzzle: Puzzle, rules: Rules) -> Self {
        let secret = puzzle.secret();
        let width = secret.len();

        let mut known_correct = vec![None; width];
        known_correct[0] = Some(secret.first_letter());

        Self {
            grid: Grid::new(MAX_ATTEMPTS, width),
            puzzle,
            rules,
            current_attempt: 0,
            input: String::new(),
            game_over: false,
            has_won: false,
            status_message: String::new(),
            key_states: KeyStates::new(),
            known_correct,
            last_revealed_row: None,
        }
    }

    pub(crate) fn from_parts(puzzle: Puzzle, rules: Rules, parts: SessionParts) -> Self {
        Self {
            puzzle,
            rules,
            grid: parts.grid,
            current_attempt: parts.current_attempt,
            input: parts.input,
            game_over: parts.game_over,
            has_won: parts.has_won,
            status_message: parts.status_message,
            key_states: parts.key_states,
            known_correct: parts.known_correct,
            last_revealed_row: parts.last_revealed_row,
        }
    }

    /// Score a guess and advance the game
    ///
    /// The input is trimmed and uppercased first.
    ///
    /// # Errors
    /// - `GuessError::Finished` once the game is won or lost
    /// - `GuessError::WrongLength` when the length differs from the secret's
    /// - `GuessError::InvalidLetters` for characters outside A-Z
    /// - `GuessError::FirstLetterMismatch` when the first letter is locked and differs
    ///
    /// A rejected guess leaves the session untouched and consumes no attempt.
    pub fn submit(&self, raw: &str) -> Result<Submission, GuessError> {
        if self.game_over {
            return Err(GuessError::Finished);
        }

        let guess = self.validate(raw)?;
        let secret = self.puzzle.secret();
        let feedback = Feedback::calculate(&guess, secret).map_err(|mismatch| {
            GuessError::WrongLength {
                expected: mismatch.secret,
                actual: mismatch.guess,
            }
        })?;

        let row = self.current_attempt;
        let cells: Vec<Cell> = guess
            .chars()
            .zip(feedback.states())
            .map(|(letter, &state)| Cell::new(letter, state))
            .collect();

        let mut next = self.clone();
        next.grid = self.grid.with_row(row, cells);
        next.key_states.record(&guess, &feedback);
        for (position, (letter, &state)) in guess.chars().zip(feedback.states()).enumerate() {
            if state == CellState::Correct {
                next.known_correct[position] = Some(letter);
            }
        }
        next.last_revealed_row = Some(row);
        next.input.clear();

        let outcome = if guess == *secret {
            next.has_won = true;
            next.game_over = true;
            next.status_message = format!(
                "Bravo! You found {} in {}/{MAX_ATTEMPTS} 🎉",
                self.puzzle.describe(),
                row + 1
            );
            Outcome::Won
        } else if row + 1 >= MAX_ATTEMPTS {
            next.has_won = false;
            next.game_over = true;
            next.status_message = format!(
                "Out of attempts! {} was {secret}.",
                capitalize(self.puzzle.describe())
            );
            Outcome::Lost
        } else {
            next.current_attempt += 1;
            next.status_message.clear();
            Outcome::Continue
        };

        debug!(
            guess = guess.text(),
            row,
            correct = feedback.count_correct(),
            present = feedback.count_present(),
            ?outcome,
            "guess scored"
        );

        Ok(Submission {
            session: next,
            row,
            feedback,
            outcome,
        })
    }

    /// Submit the current input buffer
    ///
    /// # Errors
    /// Same as [`GameSession::submit`].
    pub fn submit_input(&self) -> Result<Submission, GuessError> {
        self.submit(&self.input)
    }

    fn validate(&self, raw: &str) -> Result<Word, GuessError> {
        let normalized = raw.trim().to_uppercase();
        let secret = self.puzzle.secret();

        let actual = normalized.chars().count();
        if actual != secret.len() {
            return Err(GuessError::WrongLength {
                expected: secret.len(),
                actual,
            });
        }

        let guess = Word::new(&normalized).map_err(|_| GuessError::InvalidLetters)?;

        if self.rules.lock_first_letter && guess.first_letter() != secret.first_letter() {
            return Err(GuessError::FirstLetterMismatch {
                expected: secret.first_letter(),
                actual: guess.first_letter(),
            });
        }

        Ok(guess)
    }

    /// Append a typed letter to the input buffer
    ///
    /// Ignored when the game is over, the buffer is full or `ch` is not a
    /// letter. With the first letter locked, typing into an empty buffer
    /// anything but that letter fills it in first.
    #[must_use]
    pub fn with_letter(&self, ch: char) -> Self {
        if self.game_over || !ch.is_ascii_alphabetic() {
            return self.clone();
        }

        let width = self.width();
        let letter = ch.to_ascii_uppercase();
        let mut next = self.clone();

        if next.input.is_empty() && self.rules.lock_first_letter && width > 1 {
            let first = self.puzzle.secret().first_letter();
            if letter != first {
                next.input.push(first);
            }
        }

        if next.input.len() >= width {
            return self.clone();
        }

        next.input.push(letter);
        next
    }

    /// Remove the last letter of the input buffer
    #[must_use]
    pub fn without_last_letter(&self) -> Self {
        if self.game_over || self.input.is_empty() {
            return self.clone();
        }

        let mut next = self.clone();
        next.input.pop();
        next
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match (self.game_over, self.has_won) {
            (true, true) => Status::Won,
            (true, false) => Status::Lost,
            (false, _) => Status::Active {
                attempt: self.current_attempt,
            },
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        self.puzzle.secret()
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Letters per row
    #[must_use]
    pub fn width(&self) -> usize {
        self.puzzle.secret().len()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    /// Rows scored so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        if self.game_over {
            (self.current_attempt + 1).min(MAX_ATTEMPTS)
        } else {
            self.current_attempt
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.has_won
    }

    #[must_use]
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    #[must_use]
    pub fn key_states(&self) -> &KeyStates {
        &self.key_states
    }

    /// Letters confirmed at each position, the first one given from the start
    #[must_use]
    pub fn known_correct(&self) -> &[Option<char>] {
        &self.known_correct
    }

    #[must_use]
    pub const fn last_revealed_row(&self) -> Option<usize> {
        self.last_revealed_row
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
