//! Single-pass day classification.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::day_type::DayType;
use crate::policy::{CalendarPolicy, is_weekend};

/// Complete date → category mapping for one policy.
///
/// Holds exactly one entry for every date in
/// `[policy.classification_start(), policy.last_day()]`, plus any legal
/// holiday that falls outside that window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    days: BTreeMap<NaiveDate, DayType>,
    window: (NaiveDate, NaiveDate),
}

impl Classification {
    /// Returns the category of `date`, if it was classified.
    pub fn get(&self, date: NaiveDate) -> Option<DayType> {
        self.days.get(&date).copied()
    }

    /// Iterates over all classified dates in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, DayType)> + '_ {
        self.days.iter().map(|(&d, &t)| (d, t))
    }

    /// Number of classified dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Inclusive `(first, last)` classification window.
    pub fn window(&self) -> (NaiveDate, NaiveDate) {
        self.window
    }

    /// Instructional dates with their A/B label, in chronological order.
    pub fn instructional_days(&self) -> impl Iterator<Item = (NaiveDate, DayType)> + '_ {
        self.iter().filter(|(_, t)| t.is_instructional())
    }

    /// Per-category tallies.
    pub fn counts(&self) -> BTreeMap<DayType, usize> {
        let mut counts = BTreeMap::new();
        for &t in self.days.values() {
            *counts.entry(t).or_insert(0) += 1;
        }
        counts
    }
}

/// Outcome of the precedence chain for one date.
enum Rule {
    Fixed(DayType),
    Instructional,
}

/// Applies the precedence chain to a single date; first match wins.
///
/// Planning > C > Legal > instructional > Recess > Weekend > Holiday.
fn rule_for(policy: &CalendarPolicy, date: NaiveDate) -> Rule {
    if policy.planning_days().contains(&date) {
        Rule::Fixed(DayType::Planning)
    } else if date == policy.c_day() {
        Rule::Fixed(DayType::C)
    } else if policy.legal_holidays().contains(&date) {
        Rule::Fixed(DayType::Legal)
    } else if policy.is_instruction_day(date) {
        Rule::Instructional
    } else if policy.recess().contains(&date) {
        Rule::Fixed(DayType::Recess)
    } else if is_weekend(date) {
        Rule::Fixed(DayType::Weekend)
    } else {
        Rule::Fixed(DayType::Holiday)
    }
}

/// Classifies every date of the policy window.
///
/// Walks the window once in chronological order. The only state carried
/// between dates is the instructional counter, which advances only on dates
/// that reach the instructional rule, so A/B strictly alternate.
///
/// Legal holidays outside the window are recorded as [`DayType::Legal`] so
/// that any rendered month colors them consistently.
pub fn classify(policy: &CalendarPolicy) -> Classification {
    let start = policy.classification_start();
    let end = policy.last_day();

    let mut days = BTreeMap::new();
    let mut n_instructional = 0usize;
    for date in start.iter_days().take_while(|d| *d <= end) {
        let day_type = match rule_for(policy, date) {
            Rule::Fixed(t) => t,
            Rule::Instructional => {
                let t = DayType::rotation(n_instructional);
                n_instructional += 1;
                t
            }
        };
        days.insert(date, day_type);
    }

    for &date in policy.legal_holidays() {
        days.entry(date).or_insert(DayType::Legal);
    }

    let classification = Classification {
        days,
        window: (start, end),
    };
    debug!(
        %start,
        %end,
        n_days = classification.len(),
        n_instructional,
        counts = ?classification.counts(),
        "classified academic calendar"
    );
    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ymd;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        ymd(y, m, day).unwrap()
    }

    fn week_policy() -> CalendarPolicy {
        // Mon 2025-09-01 .. Sun 2025-09-14
        CalendarPolicy::new(d(2025, 9, 1), d(2025, 9, 14))
    }

    #[test]
    fn c_day_is_not_counted() {
        let c = classify(&week_policy());
        assert_eq!(c.get(d(2025, 9, 1)), Some(DayType::C));
        assert_eq!(c.get(d(2025, 9, 2)), Some(DayType::A));
        assert_eq!(c.get(d(2025, 9, 3)), Some(DayType::B));
        assert_eq!(c.get(d(2025, 9, 4)), Some(DayType::A));
        assert_eq!(c.get(d(2025, 9, 5)), Some(DayType::B));
        assert_eq!(c.get(d(2025, 9, 6)), Some(DayType::Weekend));
        assert_eq!(c.get(d(2025, 9, 8)), Some(DayType::A));
    }

    #[test]
    fn planning_beats_c_day() {
        let policy = week_policy().with_planning_days([d(2025, 9, 1)]);
        let c = classify(&policy);
        assert_eq!(c.get(d(2025, 9, 1)), Some(DayType::Planning));
        assert!(!c.iter().any(|(_, t)| t == DayType::C));
    }

    #[test]
    fn planning_beats_recess_and_legal() {
        let policy = week_policy()
            .with_recess([d(2025, 9, 3)])
            .with_legal_holidays([d(2025, 9, 3), d(2025, 9, 4)])
            .with_planning_days([d(2025, 9, 3)]);
        let c = classify(&policy);
        assert_eq!(c.get(d(2025, 9, 3)), Some(DayType::Planning));
        assert_eq!(c.get(d(2025, 9, 4)), Some(DayType::Legal));
    }

    #[test]
    fn legal_does_not_advance_rotation() {
        let policy = week_policy().with_legal_holidays([d(2025, 9, 3)]);
        let c = classify(&policy);
        assert_eq!(c.get(d(2025, 9, 2)), Some(DayType::A));
        assert_eq!(c.get(d(2025, 9, 3)), Some(DayType::Legal));
        assert_eq!(c.get(d(2025, 9, 4)), Some(DayType::B));
    }

    #[test]
    fn recess_weekday_is_recess() {
        let policy = week_policy().with_recess_range(d(2025, 9, 3), d(2025, 9, 7));
        let c = classify(&policy);
        assert_eq!(c.get(d(2025, 9, 3)), Some(DayType::Recess));
        assert_eq!(c.get(d(2025, 9, 5)), Some(DayType::Recess));
        // Recess beats weekend.
        assert_eq!(c.get(d(2025, 9, 6)), Some(DayType::Recess));
        assert_eq!(c.get(d(2025, 9, 8)), Some(DayType::B));
    }

    #[test]
    fn pre_start_weekday_is_holiday() {
        let policy = CalendarPolicy::new(d(2025, 8, 14), d(2025, 8, 22))
            .with_planning_days([d(2025, 8, 8)]);
        let c = classify(&policy);
        assert_eq!(c.window(), (d(2025, 8, 8), d(2025, 8, 22)));
        assert_eq!(c.get(d(2025, 8, 8)), Some(DayType::Planning));
        assert_eq!(c.get(d(2025, 8, 9)), Some(DayType::Weekend));
        assert_eq!(c.get(d(2025, 8, 11)), Some(DayType::Holiday));
        assert_eq!(c.get(d(2025, 8, 7)), None);
    }

    #[test]
    fn out_of_window_legal_holiday_is_legal() {
        let policy = week_policy().with_legal_holidays([d(2025, 9, 19), d(2025, 8, 29)]);
        let c = classify(&policy);
        assert_eq!(c.get(d(2025, 9, 19)), Some(DayType::Legal));
        assert_eq!(c.get(d(2025, 8, 29)), Some(DayType::Legal));
        assert_eq!(c.get(d(2025, 9, 18)), None);
    }

    #[test]
    fn counts_cover_every_day() {
        let c = classify(&week_policy());
        let total: usize = c.counts().values().sum();
        assert_eq!(total, c.len());
        assert_eq!(c.len(), 14);
        assert_eq!(c.counts().get(&DayType::Weekend), Some(&4));
    }

    #[test]
    fn single_day_window() {
        let policy = CalendarPolicy::new(d(2025, 9, 2), d(2025, 9, 2));
        let c = classify(&policy);
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(d(2025, 9, 2)), Some(DayType::C));
    }

    #[test]
    fn inverted_window_classifies_nothing() {
        let policy = CalendarPolicy::new(d(2025, 9, 2), d(2025, 9, 1));
        assert!(classify(&policy).is_empty());
    }
}
