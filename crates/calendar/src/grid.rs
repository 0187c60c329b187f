//! Week-by-week month matrices.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::month::YearMonth;

/// Column header abbreviations, indexed by days from Monday.
const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["M", "T", "W", "Th", "F", "Sa", "Su"];

/// Column of `weekday` in a week that begins on `first_weekday`.
fn column_of(weekday: Weekday, first_weekday: Weekday) -> usize {
    ((weekday.num_days_from_monday() + 7 - first_weekday.num_days_from_monday()) % 7) as usize
}

/// Column headers for a week beginning on `first_weekday`.
///
/// Sunday-first gives `Su M T W Th F Sa`.
pub fn weekday_headers(first_weekday: Weekday) -> [&'static str; 7] {
    let offset = first_weekday.num_days_from_monday() as usize;
    std::array::from_fn(|col| WEEKDAY_ABBREVIATIONS[(offset + col) % 7])
}

/// One month laid out as rows of seven day slots.
///
/// Each row is a week; slots before the first and after the last day of the
/// month are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year_month: YearMonth,
    first_weekday: Weekday,
    weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    /// Builds the grid for `year_month` with weeks starting on `first_weekday`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month's dates cannot be
    /// represented.
    pub fn new(year_month: YearMonth, first_weekday: Weekday) -> Result<Self, CalendarError> {
        let first = year_month.first_day()?;
        let n_days = year_month.days_in_month()?;

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut col = column_of(first.weekday(), first_weekday);
        for day in 1..=n_days {
            week[col] = Some(year_month.day(day)?);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col != 0 {
            weeks.push(week);
        }

        Ok(Self {
            year_month,
            first_weekday,
            weeks,
        })
    }

    /// The month this grid represents.
    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    /// The weekday shown in the first column.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// The week rows.
    pub fn weeks(&self) -> &[[Option<NaiveDate>; 7]] {
        &self.weeks
    }

    /// Number of week rows (4..=6).
    pub fn n_weeks(&self) -> usize {
        self.weeks.len()
    }

    /// Column headers matching this grid's first weekday.
    pub fn headers(&self) -> [&'static str; 7] {
        weekday_headers(self.first_weekday)
    }
}
