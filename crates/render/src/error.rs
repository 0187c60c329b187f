//! Error types for termcal-render.

/// Error type for all fallible operations in the termcal-render crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// Returned when a render configuration value is out of range.
    #[error("invalid render configuration: {reason}")]
    InvalidConfig {
        /// Description of the invalid setting.
        reason: String,
    },

    /// Returned when layout is asked to place zero months.
    #[error("no months to lay out")]
    NoMonths,

    /// Wraps an error originating from the termcal-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<termcal_calendar::CalendarError> for RenderError {
    fn from(e: termcal_calendar::CalendarError) -> Self {
        RenderError::Calendar {
            reason: e.to_string(),
        }
    }
}
