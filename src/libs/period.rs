//! Monthly period resolution for recurring epics.
//!
//! A [`Period`] is a validated (month, year) pair together with the
//! date-derived values the rest of the application needs: the first and
//! last working day of the month and the display tokens used for
//! template rendering and summary matching.
//!
//! Working days are Monday through Friday. Holidays are not considered;
//! the tracker only needs approximate month boundaries for epic start
//! and due dates.

use crate::libs::errors::RepicError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November", "December",
];

/// A resolved monthly period with derived working-day boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub month: u32,
    pub year: i32,
    pub first_working_day: NaiveDate,
    pub last_working_day: NaiveDate,
}

impl Period {
    /// Resolves a (month, year) pair into a full period.
    ///
    /// Returns [`RepicError::InvalidMonth`] when `month` is outside 1-12.
    pub fn resolve(month: u32, year: i32) -> Result<Self, RepicError> {
        if !(1..=12).contains(&month) {
            return Err(RepicError::InvalidMonth(month));
        }
        Ok(Self {
            month,
            year,
            first_working_day: first_working_day(year, month),
            last_working_day: last_working_day(year, month),
        })
    }

    /// Resolves the current calendar month.
    pub fn current() -> Result<Self, RepicError> {
        let now = chrono::Local::now().date_naive();
        Self::resolve(now.month(), now.year())
    }

    /// The period one month earlier, wrapping the year at January.
    pub fn previous(&self) -> Result<Self, RepicError> {
        match self.month {
            1 => Self::resolve(12, self.year - 1),
            m => Self::resolve(m - 1, self.year),
        }
    }

    /// Full English month name, e.g. `March`.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Three-letter month abbreviation, e.g. `Mar`.
    pub fn month_short(&self) -> &'static str {
        &self.month_name()[..3]
    }

    /// Two-digit year, e.g. `26` for 2026.
    pub fn year_short(&self) -> String {
        format!("{:02}", self.year.rem_euclid(100))
    }

    /// Calendar quarter, `Q1` through `Q4`.
    pub fn quarter(&self) -> String {
        format!("Q{}", (self.month - 1) / 3 + 1)
    }

    /// Month marker used in epic summaries, e.g. `Mar'26`.
    ///
    /// Duplicate detection and previous-month searches key on this
    /// suffix, so its format must stay in sync with the `{month_short}`
    /// and `{year_short}` tokens.
    pub fn suffix(&self) -> String {
        format!("{}'{}", self.month_short(), self.year_short())
    }
}

fn first_working_day(year: i32, month: u32) -> NaiveDate {
    let mut day = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    while is_weekend(&day) {
        day += Duration::days(1);
    }
    day
}

fn last_working_day(year: i32, month: u32) -> NaiveDate {
    let mut day = last_calendar_day(year, month);
    while is_weekend(&day) {
        day -= Duration::days(1);
    }
    day
}

/// Last calendar day of a month, computed from the first of the next month.
pub fn last_calendar_day(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
}

fn is_weekend(day: &NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}
