//! Month-grid layout and overlay rendering for academic calendars.
//!
//! Rendering runs in two phases. [`lay_out`] measures the page: panel
//! frames, table cells with their fills and labels, and the legend.
//! [`place_overlays`] then queries the measured cell boxes to put holiday
//! crosses, planning rings and grading outlines on the right cells. The
//! result is flattened into a backend-neutral [`Figure`].
//!
//! # Quick start
//!
//! ```ignore
//! use termcal_calendar::{CalendarPolicy, classify, months_between, ymd};
//! use termcal_render::{ColorTable, Figure, MarkerSet, RenderConfig, lay_out, place_overlays, to_svg};
//!
//! let policy = CalendarPolicy::new(ymd(2025, 8, 14)?, ymd(2025, 12, 19)?);
//! let months = months_between(policy.academic_start(), policy.last_day());
//! let config = RenderConfig::default();
//!
//! let layout = lay_out(&classify(&policy), &months, &ColorTable::default(), &config)?;
//! let overlays = place_overlays(&layout, &MarkerSet::from_policy(&policy), &config);
//! let figure = Figure::compose(&layout, &overlays);
//! let svg = to_svg(&figure).to_string();
//! ```
//!
//! # Architecture
//!
//! ```text
//! lay_out()                    (layout.rs)
//!   ├─ MonthGrid per month     (termcal-calendar)
//!   ├─ cell fills              (palette.rs)
//!   └─ lay_out_legend()        (legend.rs, metrics.rs)
//! place_overlays()             (overlay.rs)
//! Figure::compose()            (figure.rs)
//! to_svg()                     (document.rs)
//! ```

mod config;
mod document;
mod error;
mod figure;
mod geometry;
mod layout;
mod legend;
mod metrics;
mod overlay;
mod palette;

pub use config::{FontSizes, Margins, RenderConfig};
pub use document::{DEFAULT_FONT_FAMILY, to_svg, to_svg_with_font};
pub use error::RenderError;
pub use figure::{Align, Figure, Shape, Stroke};
pub use geometry::{POINTS_PER_INCH, Point, Rect, Size};
pub use layout::{CellKind, MeasuredLayout, MonthPanel, TableCell, lay_out};
pub use legend::{Legend, LegendItem, Swatch};
pub use metrics::{baseline_offset, text_width};
pub use overlay::{MarkerSet, Overlay, place_overlays};
pub use palette::{ColorTable, Rgb};
