//! Error types for the termcal-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the termcal-calendar crate.
///
/// Classification itself never fails; these variants cover constructing
/// months, dates and policy windows from raw numbers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year/month/day triple is not a real Gregorian date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when a date window ends before it starts.
    #[error("inverted date range: {start} is after {end}")]
    InvertedRange {
        /// First day of the window.
        start: NaiveDate,
        /// Last day of the window.
        end: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2025,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid date: 2025-02-30");
    }

    #[test]
    fn error_inverted_range() {
        let err = CalendarError::InvertedRange {
            start: NaiveDate::from_ymd_opt(2026, 6, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "inverted date range: 2026-06-05 is after 2025-08-14"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
