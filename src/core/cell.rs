//! Grid cells and their feedback states

use serde::{Deserialize, Serialize};

/// Feedback state of a grid cell or keyboard key
///
/// Variants are declared in aggregation order, so the derived `Ord` is the
/// keyboard priority: `Correct > Present > Absent > Empty`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// Not played yet
    #[default]
    Empty,
    /// Letter is not in the word (or all its occurrences are already accounted for)
    Absent,
    /// Letter is in the word at another position
    Present,
    /// Letter is at the right position
    Correct,
}

impl CellState {
    /// Keyboard priority: correct=3, present=2, absent=1, empty=0
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Combine a letter's best known state with a freshly observed one
    ///
    /// Returns `next` when nothing was known yet or when it outranks
    /// `previous`; otherwise `previous` is kept.
    ///
    /// # Examples
    /// ```
    /// use sutom_daily::core::CellState;
    ///
    /// assert_eq!(CellState::merge(None, CellState::Absent), CellState::Absent);
    /// assert_eq!(
    ///     CellState::merge(Some(CellState::Correct), CellState::Present),
    ///     CellState::Correct
    /// );
    /// ```
    #[must_use]
    pub fn merge(previous: Option<Self>, next: Self) -> Self {
        match previous {
            Some(previous) if previous.priority() >= next.priority() => previous,
            _ => next,
        }
    }

    /// Whether the cell carries feedback
    #[inline]
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// A single grid cell: an optional letter and its state
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, with = "letter")]
    pub letter: Option<char>,
    #[serde(default)]
    pub state: CellState,
}

impl Cell {
    pub const EMPTY: Self = Self {
        letter: None,
        state: CellState::Empty,
    };

    #[must_use]
    pub const fn new(letter: char, state: CellState) -> Self {
        Self {
            letter: Some(letter),
            state,
        }
    }
}

/// Letters are stored as one-character strings, `""` meaning no letter
mod letter {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)] // Signature imposed by `#[serde(with)]`
    pub fn serialize<S: Serializer>(letter: &Option<char>, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(letter.map_or("", |ch| &*ch.encode_utf8(&mut buf)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<char>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.and_then(|text| text.chars().next()))
    }
}
