//! Year/month pairs and month enumeration.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// A calendar month with year context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the following month, wrapping December into January.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the first day of the month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the year is outside the
    /// range chrono can represent.
    pub fn first_day(self) -> Result<NaiveDate, CalendarError> {
        self.day(1)
    }

    /// Returns the given day of this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month has no such day.
    pub fn day(self, day: u32) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or(CalendarError::InvalidDate {
            year: self.year,
            month: self.month,
            day,
        })
    }

    /// Number of days in the month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the year is outside the
    /// range chrono can represent.
    pub fn days_in_month(self) -> Result<u32, CalendarError> {
        Ok(self.first_day()?.num_days_in_month().into())
    }

    /// Panel title, e.g. `August '25`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the year is outside the
    /// range chrono can represent.
    pub fn title(self) -> Result<String, CalendarError> {
        Ok(self.first_day()?.format("%B '%y").to_string())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Every month from the month of `start` through the month of `end`,
/// inclusive.
///
/// Returns an empty list if `end` falls in an earlier month than `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<YearMonth> {
    let last = YearMonth::of(end);
    let mut months = Vec::new();
    let mut current = YearMonth::of(start);
    while current <= last {
        months.push(current);
        current = current.next();
    }
    months
}
