//! Day categories.

use std::fmt;

/// The category a single calendar date is assigned to.
///
/// Variants are declared in classification precedence order where it
/// matters (Planning beats C, C beats Legal, and so on); see
/// [`classify`](crate::classify) for the full rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayType {
    /// Teacher planning day.
    Planning,
    /// The single C-schedule day.
    C,
    /// Statutory holiday.
    Legal,
    /// Instructional A day.
    A,
    /// Instructional B day.
    B,
    /// Multi-day break.
    Recess,
    /// Saturday or Sunday.
    Weekend,
    /// Weekday with no instruction and no other tag.
    Holiday,
}

impl DayType {
    /// All categories, in precedence order.
    pub const ALL: [DayType; 8] = [
        DayType::Planning,
        DayType::C,
        DayType::Legal,
        DayType::A,
        DayType::B,
        DayType::Recess,
        DayType::Weekend,
        DayType::Holiday,
    ];

    /// Short label used in logs and legends.
    pub fn label(self) -> &'static str {
        match self {
            DayType::Planning => "Planning",
            DayType::C => "C",
            DayType::Legal => "Legal",
            DayType::A => "A",
            DayType::B => "B",
            DayType::Recess => "Recess",
            DayType::Weekend => "Weekend",
            DayType::Holiday => "Holiday",
        }
    }

    /// Returns `true` for the alternating A/B instructional days.
    pub fn is_instructional(self) -> bool {
        matches!(self, DayType::A | DayType::B)
    }

    /// Returns the A/B label for the `n`-th instructional day (0-based).
    pub(crate) fn rotation(n: usize) -> Self {
        if n % 2 == 0 { DayType::A } else { DayType::B }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
