//! # termcal-calendar
//!
//! Academic-year policy data, day classification and month grids.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarPolicy"] -->|"classify()"| B["Classification"]
//!     A -->|"academic_start / last_day"| C["months_between()"]
//!     C --> D["Vec of YearMonth"]
//!     D -->|"MonthGrid::new()"| E["MonthGrid"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use termcal_calendar::{CalendarPolicy, DayType, classify, months_between, ymd};
//!
//! let policy = CalendarPolicy::new(ymd(2025, 8, 14)?, ymd(2026, 6, 5)?)
//!     .with_legal_holidays([ymd(2025, 11, 11)?]);
//! let days = classify(&policy);
//! assert_eq!(days.get(ymd(2025, 8, 14)?), Some(DayType::C));
//!
//! let months = months_between(policy.academic_start(), policy.last_day());
//! assert_eq!(months.len(), 11);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day_type` | The eight day categories |
//! | `policy` | Immutable calendar policy and date helpers |
//! | `classify` | Single-pass precedence classifier |
//! | `month` | Year/month pairs and month enumeration |
//! | `grid` | Week-by-week month matrices |
//! | `error` | Error types |

mod classify;
mod day_type;
mod error;
mod grid;
mod month;
mod policy;

pub use classify::{Classification, classify};
pub use day_type::DayType;
pub use error::CalendarError;
pub use grid::{MonthGrid, weekday_headers};
pub use month::{YearMonth, months_between};
pub use policy::{CalendarPolicy, is_weekend, ymd};
