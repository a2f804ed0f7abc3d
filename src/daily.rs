//! Daily word selection
//!
//! The secret word is a pure function of the calendar date: count whole days
//! since the configured start date, then index the word list cyclically.
//! Working on calendar dates (not on elapsed seconds) keeps daylight saving
//! transitions from shifting the day boundary.

use crate::core::Word;
use crate::wordlists::WordList;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Whole calendar days from `start` to `date`, negative before `start`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use sutom_daily::daily::day_index;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
/// assert_eq!(day_index(date, start), 31);
/// assert_eq!(day_index(start, date), -31);
/// ```
#[must_use]
pub fn day_index(date: NaiveDate, start: NaiveDate) -> i64 {
    date.signed_duration_since(start).num_days()
}

/// Day index of an instant, taken at its local calendar date
#[must_use]
pub fn day_index_at<Tz: TimeZone>(instant: &DateTime<Tz>, start: NaiveDate) -> i64 {
    day_index(instant.date_naive(), start)
}

/// The local calendar date today
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Secret word for a day index
///
/// The index wraps modulo the list length, negative indices included, so the
/// selection is periodic with period `words.len()`.
///
/// # Examples
/// ```
/// use sutom_daily::core::Word;
/// use sutom_daily::daily::word_of_day;
/// use sutom_daily::wordlists::WordList;
///
/// let words = WordList::new(vec![
///     Word::new("PYTHON").unwrap(),
///     Word::new("LIMACE").unwrap(),
/// ]).unwrap();
///
/// assert_eq!(word_of_day(1, &words).text(), "LIMACE");
/// assert_eq!(word_of_day(2, &words).text(), "PYTHON");
/// assert_eq!(word_of_day(-1, &words).text(), "LIMACE");
/// ```
#[must_use]
pub fn word_of_day(day_index: i64, words: &WordList) -> &Word {
    let len = words.len() as i64;
    words.at(day_index.rem_euclid(len) as usize)
}

/// Public puzzle number: day 0 is puzzle #1
#[must_use]
pub const fn puzzle_number(day_index: i64) -> i64 {
    day_index + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use chrono::{Duration, FixedOffset};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn list() -> WordList {
        WordList::new(words_from_slice(&[
            "PYTHON", "LIMACE", "PIMENT", "TIGRES", "ORANGE", "CAMION",
        ]))
        .unwrap()
    }

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn start_date_is_day_zero() {
        assert_eq!(day_index(start(), start()), 0);
        assert_eq!(word_of_day(0, &list()).text(), "PYTHON");
    }

    #[test]
    fn second_day_is_limace() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(word_of_day(day_index(date, start()), &list()).text(), "LIMACE");
    }

    #[test]
    fn index_increases_by_one_per_calendar_day() {
        let mut date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let mut previous = day_index(date, start());

        for _ in 0..800 {
            date = date.succ_opt().unwrap();
            let index = day_index(date, start());
            assert_eq!(index, previous + 1);
            previous = index;
        }
    }

    #[test]
    fn time_of_day_does_not_matter() {
        assert_eq!(day_index_at(&at("2025-01-10T00:00:00+01:00"), start()), 9);
        assert_eq!(day_index_at(&at("2025-01-10T23:59:59+01:00"), start()), 9);
    }

    #[test]
    fn dst_transition_days_count_once() {
        // Paris springs forward on 2025-03-30 and falls back on 2025-10-26:
        // those local days last 23h and 25h but still count as one day.
        let before_spring = day_index_at(&at("2025-03-29T23:30:00+01:00"), start());
        let after_spring = day_index_at(&at("2025-03-30T00:30:00+01:00"), start());
        let end_of_short_day = day_index_at(&at("2025-03-30T23:30:00+02:00"), start());
        assert_eq!(after_spring, before_spring + 1);
        assert_eq!(end_of_short_day, after_spring);

        let long_day_start = day_index_at(&at("2025-10-26T00:10:00+02:00"), start());
        let long_day_end = day_index_at(&at("2025-10-26T23:50:00+01:00"), start());
        let next_day = day_index_at(&at("2025-10-27T00:10:00+01:00"), start());
        assert_eq!(long_day_end, long_day_start);
        assert_eq!(next_day, long_day_start + 1);
    }

    #[test]
    fn elapsed_hours_are_not_days() {
        // Two hours apart but on different calendar dates
        let late = at("2025-01-05T23:00:00+01:00");
        let early = late + Duration::hours(2);
        assert_eq!(day_index_at(&early, start()), day_index_at(&late, start()) + 1);
    }

    #[test]
    fn word_of_day_is_periodic() {
        let words = list();
        let period = words.len() as i64;

        for day in -20..20 {
            assert_eq!(word_of_day(day, &words), word_of_day(day + period, &words));
        }
    }

    #[test]
    fn negative_indices_wrap() {
        let words = list();
        assert_eq!(word_of_day(-1, &words).text(), "CAMION");
        assert_eq!(word_of_day(-6, &words).text(), "PYTHON");
        assert_eq!(word_of_day(-7, &words).text(), "CAMION");
        assert_eq!(word_of_day(i64::MIN, &words), word_of_day(i64::MIN.rem_euclid(6), &words));
    }

    #[test]
    fn dates_before_start_have_negative_index() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(day_index(date, start()), -1);
        assert_eq!(word_of_day(day_index(date, start()), &list()).text(), "CAMION");
    }

    #[test]
    fn puzzle_numbers_start_at_one() {
        assert_eq!(puzzle_number(0), 1);
        assert_eq!(puzzle_number(41), 42);
    }
}
