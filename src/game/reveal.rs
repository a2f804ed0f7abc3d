//! Staggered reveal of a scored row
//!
//! Scoring is immediate: the session is updated as soon as a guess is
//! accepted. The board then uncovers the row one column at a time through a
//! queue of timed events. Every event carries the [`Generation`] it was
//! scheduled under, and events from an older generation are dropped, so a
//! session swapped in mid-animation never receives stale reveals.

use super::{GameSession, Outcome, Submission};
use crate::core::{CellState, KeyStates};
use crate::errors::GuessError;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::trace;

/// Identifies one session value shown by a [`Board`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Uncover one cell at `due`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    pub generation: Generation,
    pub row: usize,
    pub column: usize,
    pub due: Instant,
    /// Final cell of the row
    pub last: bool,
}

/// Pending reveal events ordered by due time
#[derive(Debug, Default, Clone)]
pub struct RevealQueue {
    events: VecDeque<RevealEvent>,
}

impl RevealQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping due order, stable for equal times
    pub fn schedule(&mut self, event: RevealEvent) {
        let index = self.events.partition_point(|queued| queued.due <= event.due);
        self.events.insert(index, event);
    }

    /// Take the earliest event if it is due at `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<RevealEvent> {
        if self.events.front()?.due <= now {
            self.events.pop_front()
        } else {
            None
        }
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.events.front().map(|event| event.due)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// What a grid cell looks like right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCell {
    pub letter: Option<char>,
    pub state: CellState,
    /// A hint on the active row rather than a typed or scored letter
    pub placeholder: bool,
}

impl DisplayCell {
    const BLANK: Self = Self {
        letter: None,
        state: CellState::Empty,
        placeholder: false,
    };
}

#[derive(Debug, Clone)]
struct Reveal {
    row: usize,
    revealed: usize,
    keys_before: KeyStates,
}

/// A session plus its presentation state
#[derive(Debug, Clone)]
pub struct Board {
    session: GameSession,
    generation: Generation,
    reveal: Option<Reveal>,
    queue: RevealQueue,
    stagger: Duration,
}

impl Board {
    #[must_use]
    pub fn new(session: GameSession, stagger: Duration) -> Self {
        Self {
            session,
            generation: Generation::default(),
            reveal: None,
            queue: RevealQueue::new(),
            stagger,
        }
    }

    /// Show another session, abandoning any reveal in flight
    pub fn replace(&mut self, session: GameSession) {
        self.generation = self.generation.next();
        self.session = session;
        self.reveal = None;
        self.queue.clear();
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.next_due()
    }

    pub fn push_letter(&mut self, ch: char) {
        if !self.is_revealing() {
            self.session = self.session.with_letter(ch);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_revealing() {
            self.session = self.session.without_last_letter();
        }
    }

    /// Submit the typed word and start revealing its row
    ///
    /// Returns `Ok(None)` without doing anything while a reveal is running.
    ///
    /// # Errors
    /// The guess was rejected; see [`GameSession::submit`].
    pub fn submit(&mut self, now: Instant) -> Result<Option<Outcome>, GuessError> {
        if self.is_revealing() {
            return Ok(None);
        }

        let submission = self.session.submit_input()?;
        Ok(Some(self.begin_reveal(submission, now)))
    }

    /// Like [`Board::submit`] for a whole word typed elsewhere
    ///
    /// # Errors
    /// The guess was rejected; see [`GameSession::submit`].
    pub fn submit_word(&mut self, raw: &str, now: Instant) -> Result<Option<Outcome>, GuessError> {
        if self.is_revealing() {
            return Ok(None);
        }

        let submission = self.session.submit(raw)?;
        Ok(Some(self.begin_reveal(submission, now)))
    }

    fn begin_reveal(&mut self, submission: Submission, now: Instant) -> Outcome {
        let keys_before = self.session.key_states().clone();
        let width = submission.feedback.len();
        let row = submission.row;
        self.session = submission.session;

        if width > 1 {
            self.reveal = Some(Reveal {
                row,
                revealed: 1,
                keys_before,
            });
            for column in 1..width {
                self.queue.schedule(RevealEvent {
                    generation: self.generation,
                    row,
                    column,
                    due: now + self.stagger * column as u32,
                    last: column + 1 == width,
                });
            }
        }

        trace!(row, width, "reveal started");
        submission.outcome
    }

    /// Apply every event due at `now`; true when something changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(event) = self.queue.pop_due(now) {
            changed |= self.apply(event);
        }
        changed
    }

    /// Apply one event, ignoring it if it belongs to another generation
    pub fn apply(&mut self, event: RevealEvent) -> bool {
        if event.generation != self.generation {
            trace!(?event, current = ?self.generation, "dropping stale reveal event");
            return false;
        }

        let Some(reveal) = self.reveal.as_mut().filter(|reveal| reveal.row == event.row) else {
            return false;
        };

        reveal.revealed = reveal.revealed.max(event.column + 1);
        if event.last {
            self.reveal = None;
        }
        true
    }

    /// Keyboard colors, frozen at their previous values until a reveal ends
    #[must_use]
    pub fn visible_keys(&self) -> &KeyStates {
        self.reveal
            .as_ref()
            .map_or_else(|| self.session.key_states(), |reveal| &reveal.keys_before)
    }

    /// Status line, hidden while a reveal is running
    #[must_use]
    pub fn visible_message(&self) -> Option<&str> {
        let message = self.session.status_message();
        (!self.is_revealing() && !message.is_empty()).then_some(message)
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> DisplayCell {
        let Some(cell) = self.session.grid().cell(row, column) else {
            return DisplayCell::BLANK;
        };

        if cell.state.is_resolved() {
            let hidden = self
                .reveal
                .as_ref()
                .is_some_and(|reveal| reveal.row == row && column >= reveal.revealed);
            return DisplayCell {
                letter: cell.letter,
                state: if hidden { CellState::Empty } else { cell.state },
                placeholder: false,
            };
        }

        if self.is_active_row(row) {
            return self.active_cell(column);
        }

        DisplayCell::BLANK
    }

    fn is_active_row(&self, row: usize) -> bool {
        !self.session.is_over() && !self.is_revealing() && row == self.session.current_attempt()
    }

    fn active_cell(&self, column: usize) -> DisplayCell {
        if let Some(letter) = self.session.input().chars().nth(column) {
            return DisplayCell {
                letter: Some(letter),
                state: CellState::Empty,
                placeholder: false,
            };
        }

        if column == 0 && self.session.rules().lock_first_letter {
            return DisplayCell {
                letter: Some(self.session.secret().first_letter()),
                state: CellState::Empty,
                placeholder: false,
            };
        }

        DisplayCell {
            letter: self.session.known_correct().get(column).copied().flatten(),
            state: CellState::Empty,
            placeholder: true,
        }
    }
}
