//! Puzzles: the daily word, or a random practice word

use crate::core::Word;
use crate::daily::{day_index, puzzle_number, word_of_day};
use crate::wordlists::WordList;
use chrono::NaiveDate;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Puzzle {
    Daily(DailyPuzzle),
    Practice(Word),
}

/// The puzzle of one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub day_index: i64,
    pub secret: Word,
}

impl DailyPuzzle {
    #[must_use]
    pub fn new(day_index: i64, words: &WordList) -> Self {
        Self {
            day_index,
            secret: word_of_day(day_index, words).clone(),
        }
    }

    /// Puzzle for a local calendar date
    #[must_use]
    pub fn for_date(date: NaiveDate, start: NaiveDate, words: &WordList) -> Self {
        Self::new(day_index(date, start), words)
    }

    #[must_use]
    pub const fn number(&self) -> i64 {
        puzzle_number(self.day_index)
    }
}

impl Puzzle {
    /// A random word from the list, not tied to any day
    pub fn practice<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        let index = rng.random_range(0..words.len());
        Self::Practice(words.words()[index].clone())
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        match self {
            Self::Daily(daily) => &daily.secret,
            Self::Practice(secret) => secret,
        }
    }

    #[must_use]
    pub fn as_daily(&self) -> Option<&DailyPuzzle> {
        match self {
            Self::Daily(daily) => Some(daily),
            Self::Practice(_) => None,
        }
    }

    #[must_use]
    pub fn day_index(&self) -> Option<i64> {
        self.as_daily().map(|daily| daily.day_index)
    }

    #[must_use]
    pub fn number(&self) -> Option<i64> {
        self.as_daily().map(DailyPuzzle::number)
    }

    /// How messages refer to the secret
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Daily(_) => "the word of the day",
            Self::Practice(_) => "the word",
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Daily(daily) => format!("SUTOM perso #{}", daily.number()),
            Self::Practice(_) => "SUTOM perso (practice)".to_owned(),
        }
    }
}

impl From<DailyPuzzle> for Puzzle {
    fn from(value: DailyPuzzle) -> Self {
        Self::Daily(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words() -> WordList {
        WordList::new(words_from_slice(&["PYTHON", "LIMACE", "PIMENT"])).unwrap()
    }

    #[test]
    fn daily_puzzle_for_date() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let puzzle: Puzzle = DailyPuzzle::for_date(date, start, &words()).into();

        assert_eq!(puzzle.secret().text(), "LIMACE");
        assert_eq!(puzzle.day_index(), Some(1));
        assert_eq!(puzzle.number(), Some(2));
        assert_eq!(puzzle.title(), "SUTOM perso #2");
    }

    #[test]
    fn practice_puzzle_comes_from_the_list() {
        let words = words();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let puzzle = Puzzle::practice(&words, &mut rng);
            assert!(words.words().contains(puzzle.secret()));
            assert_eq!(puzzle.day_index(), None);
            assert_eq!(puzzle.number(), None);
        }
    }
}
