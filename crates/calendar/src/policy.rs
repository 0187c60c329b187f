//! Academic-year policy data.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

/// Builds a [`NaiveDate`] from raw components.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the triple is not a real
/// Gregorian date (e.g. February 30).
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Returns `true` for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Immutable calendar policy for one academic year.
///
/// Built once at startup with the `with_*` methods and passed by reference
/// to the classifier and the overlay pass. The sets are not checked for
/// overlap; rule precedence decides what a date that appears in several
/// sets becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPolicy {
    academic_start: NaiveDate,
    last_day: NaiveDate,
    c_day: NaiveDate,
    recess: BTreeSet<NaiveDate>,
    legal_holidays: BTreeSet<NaiveDate>,
    planning_days: BTreeSet<NaiveDate>,
    grading_dates: BTreeSet<NaiveDate>,
}

impl CalendarPolicy {
    /// Creates a policy for the inclusive window `[academic_start, last_day]`.
    ///
    /// The C day defaults to `academic_start`; all date sets start empty.
    pub fn new(academic_start: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            academic_start,
            last_day,
            c_day: academic_start,
            recess: BTreeSet::new(),
            legal_holidays: BTreeSet::new(),
            planning_days: BTreeSet::new(),
            grading_dates: BTreeSet::new(),
        }
    }

    /// Sets the C day.
    pub fn with_c_day(mut self, c_day: NaiveDate) -> Self {
        self.c_day = c_day;
        self
    }

    /// Adds individual recess dates.
    pub fn with_recess(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.recess.extend(dates);
        self
    }

    /// Adds every date of the inclusive span `[first, last]` to the recess set.
    ///
    /// An inverted span adds nothing.
    pub fn with_recess_range(mut self, first: NaiveDate, last: NaiveDate) -> Self {
        self.recess
            .extend(first.iter_days().take_while(|d| *d <= last));
        self
    }

    /// Adds legal holidays.
    pub fn with_legal_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.legal_holidays.extend(dates);
        self
    }

    /// Adds teacher planning days.
    pub fn with_planning_days(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.planning_days.extend(dates);
        self
    }

    /// Adds grading-period boundary dates.
    pub fn with_grading_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.grading_dates.extend(dates);
        self
    }

    /// Validates the policy window.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedRange`] if the academic start falls
    /// after the last day.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.academic_start > self.last_day {
            return Err(CalendarError::InvertedRange {
                start: self.academic_start,
                end: self.last_day,
            });
        }
        Ok(())
    }

    /// Returns the first academic day.
    pub fn academic_start(&self) -> NaiveDate {
        self.academic_start
    }

    /// Returns the last academic day.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Returns the C day.
    pub fn c_day(&self) -> NaiveDate {
        self.c_day
    }

    /// Returns the recess dates.
    pub fn recess(&self) -> &BTreeSet<NaiveDate> {
        &self.recess
    }

    /// Returns the legal holidays.
    pub fn legal_holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.legal_holidays
    }

    /// Returns the teacher planning days.
    pub fn planning_days(&self) -> &BTreeSet<NaiveDate> {
        &self.planning_days
    }

    /// Returns the grading-period boundary dates.
    pub fn grading_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.grading_dates
    }

    /// First date that receives a classification.
    ///
    /// Planning days may precede the academic start, so the window reaches
    /// back to the earliest of them.
    pub fn classification_start(&self) -> NaiveDate {
        self.planning_days
            .first()
            .map_or(self.academic_start, |&p| p.min(self.academic_start))
    }

    /// Returns `true` if `date` is a candidate for A/B instruction: a weekday
    /// inside `[academic_start, last_day]` that is not a recess date.
    pub fn is_instruction_day(&self, date: NaiveDate) -> bool {
        date >= self.academic_start
            && date <= self.last_day
            && !is_weekend(date)
            && !self.recess.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        ymd(y, m, day).unwrap()
    }

    #[test]
    fn ymd_rejects_invalid() {
        assert_eq!(
            ymd(2025, 2, 30).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn c_day_defaults_to_start() {
        let policy = CalendarPolicy::new(d(2025, 8, 14), d(2026, 6, 5));
        assert_eq!(policy.c_day(), d(2025, 8, 14));
        let moved = policy.with_c_day(d(2025, 8, 15));
        assert_eq!(moved.c_day(), d(2025, 8, 15));
    }

    #[test]
    fn recess_range_is_inclusive() {
        let policy = CalendarPolicy::new(d(2025, 8, 14), d(2026, 6, 5))
            .with_recess_range(d(2025, 12, 30), d(2026, 1, 2));
        let recess: Vec<_> = policy.recess().iter().copied().collect();
        assert_eq!(
            recess,
            vec![d(2025, 12, 30), d(2025, 12, 31), d(2026, 1, 1), d(2026, 1, 2)]
        );
    }

    #[test]
    fn inverted_recess_range_adds_nothing() {
        let policy = CalendarPolicy::new(d(2025, 8, 14), d(2026, 6, 5))
            .with_recess_range(d(2026, 1, 2), d(2025, 12, 30));
        assert!(policy.recess().is_empty());
    }

    #[test]
    fn validate_inverted_window() {
        let policy = CalendarPolicy::new(d(2026, 6, 5), d(2025, 8, 14));
        assert_eq!(
            policy.validate().unwrap_err(),
            CalendarError::InvertedRange {
                start: d(2026, 6, 5),
                end: d(2025, 8, 14),
            }
        );
    }

    #[test]
    fn validate_single_day_window() {
        let policy = CalendarPolicy::new(d(2025, 8, 14), d(2025, 8, 14));
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn classification_start_reaches_back_to_planning() {
        let policy = CalendarPolicy::new(d(2025, 8, 14), d(2026, 6, 5))
            .with_planning_days([d(2025, 9, 23), d(2025, 8, 11)]);
        assert_eq!(policy.classification_start(), d(2025, 8, 11));
    }

    #[test]
    fn classification_start_without_early_planning() {
        let policy = CalendarPolicy::new(d(2025, 8, 14), d(2026, 6, 5))
            .with_planning_days([d(2025, 9, 23)]);
        assert_eq!(policy.classification_start(), d(2025, 8, 14));

        let bare = CalendarPolicy::new(d(2025, 8, 14), d(2026, 6, 5));
        assert_eq!(bare.classification_start(), d(2025, 8, 14));
    }

    #[test]
    fn instruction_day_rules() {
        let policy = CalendarPolicy::new(d(2025, 8, 14), d(2026, 6, 5))
            .with_recess([d(2025, 11, 24)]);
        // Thursday inside the window.
        assert!(policy.is_instruction_day(d(2025, 8, 14)));
        // Saturday.
        assert!(!policy.is_instruction_day(d(2025, 8, 16)));
        // Before start.
        assert!(!policy.is_instruction_day(d(2025, 8, 13)));
        // After last day.
        assert!(!policy.is_instruction_day(d(2026, 6, 8)));
        // Recess Monday.
        assert!(!policy.is_instruction_day(d(2025, 11, 24)));
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(d(2025, 8, 16)));
        assert!(is_weekend(d(2025, 8, 17)));
        assert!(!is_weekend(d(2025, 8, 18)));
    }
}
