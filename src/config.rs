//! Built-in calendar policy for the 2025-26 academic year.
//!
//! Edit the dates below before each run; there is no external policy file.

use chrono::NaiveDate;
use termcal_calendar::{CalendarError, CalendarPolicy, ymd};

/// First day of instruction. Also the C day.
const ACADEMIC_START: (i32, u32, u32) = (2025, 8, 14);
/// Last day of the academic year.
const LAST_DAY: (i32, u32, u32) = (2026, 6, 5);

/// Inclusive recess ranges: Thanksgiving week, winter break, spring break.
const RECESS_RANGES: &[((i32, u32, u32), (i32, u32, u32))] = &[
    ((2025, 11, 24), (2025, 11, 28)),
    ((2025, 12, 22), (2026, 1, 2)),
    ((2026, 3, 23), (2026, 3, 27)),
];

const LEGAL_HOLIDAYS: &[(i32, u32, u32)] = &[
    (2025, 9, 1),
    (2025, 11, 11),
    (2026, 1, 19),
    (2026, 2, 16),
    (2026, 5, 25),
    (2026, 6, 19),
];

const TEACHER_PLANNING: &[(i32, u32, u32)] = &[
    (2025, 8, 11),
    (2025, 8, 12),
    (2025, 8, 13),
    (2025, 9, 23),
    (2025, 10, 2),
    (2025, 11, 3),
    (2026, 1, 16),
    (2026, 3, 20),
    (2026, 4, 3),
    (2026, 6, 5),
];

/// Start and end days of grading periods.
const GRADING_DATES: &[(i32, u32, u32)] = &[
    (2025, 8, 14),
    (2025, 10, 17),
    (2025, 10, 20),
    (2026, 1, 15),
    (2026, 1, 20),
    (2026, 4, 2),
    (2026, 4, 6),
    (2026, 6, 4),
];

fn date((y, m, d): (i32, u32, u32)) -> Result<NaiveDate, CalendarError> {
    ymd(y, m, d)
}

fn dates(list: &[(i32, u32, u32)]) -> Result<Vec<NaiveDate>, CalendarError> {
    list.iter().copied().map(date).collect()
}

/// Builds the academic-year policy from the literal data above.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if any entry is not a real date,
/// or [`CalendarError::InvertedRange`] if the year ends before it starts.
pub fn academic_year_policy() -> Result<CalendarPolicy, CalendarError> {
    let start = date(ACADEMIC_START)?;
    let mut policy = CalendarPolicy::new(start, date(LAST_DAY)?)
        .with_c_day(start)
        .with_legal_holidays(dates(LEGAL_HOLIDAYS)?)
        .with_planning_days(dates(TEACHER_PLANNING)?)
        .with_grading_dates(dates(GRADING_DATES)?);
    for &(first, last) in RECESS_RANGES {
        policy = policy.with_recess_range(date(first)?, date(last)?);
    }
    policy.validate()?;
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcal_calendar::{DayType, classify};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        ymd(y, m, day).unwrap()
    }

    #[test]
    fn policy_builds_and_validates() {
        let policy = academic_year_policy().unwrap();
        assert_eq!(policy.academic_start(), d(2025, 8, 14));
        assert_eq!(policy.last_day(), d(2026, 6, 5));
        assert_eq!(policy.c_day(), policy.academic_start());
        assert_eq!(policy.legal_holidays().len(), 6);
        assert_eq!(policy.planning_days().len(), 10);
        assert_eq!(policy.grading_dates().len(), 8);
        // 5 + 12 + 5 recess days.
        assert_eq!(policy.recess().len(), 22);
    }

    #[test]
    fn start_is_c_day() {
        let days = classify(&academic_year_policy().unwrap());
        assert_eq!(days.get(d(2025, 8, 14)), Some(DayType::C));
    }

    #[test]
    fn veterans_day_is_legal() {
        let days = classify(&academic_year_policy().unwrap());
        assert_eq!(days.get(d(2025, 11, 11)), Some(DayType::Legal));
    }

    #[test]
    fn first_instructional_days_alternate() {
        let days = classify(&academic_year_policy().unwrap());
        assert_eq!(days.get(d(2025, 8, 15)), Some(DayType::A));
        assert_eq!(days.get(d(2025, 8, 18)), Some(DayType::B));
    }

    #[test]
    fn early_planning_days_are_classified() {
        let days = classify(&academic_year_policy().unwrap());
        assert_eq!(days.get(d(2025, 8, 11)), Some(DayType::Planning));
        assert_eq!(days.window().0, d(2025, 8, 11));
    }
}
