//! Phase two: markers placed on measured cell boxes.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use termcal_calendar::CalendarPolicy;
use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::geometry::{Point, Rect};
use crate::layout::MeasuredLayout;

/// Half the extent of a cross marker, as a fraction of the marker size.
const CROSS_HALF: f32 = 0.3;
/// Ring radius, as a fraction of the marker size.
const RING_RADIUS: f32 = 0.35;
/// Stroke width of cross and ring markers, as a fraction of the marker size.
const MARKER_STROKE: f32 = 0.075;

/// Dates that receive markers on top of their cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    legal_holidays: BTreeSet<NaiveDate>,
    planning_days: BTreeSet<NaiveDate>,
    grading_dates: BTreeSet<NaiveDate>,
}

impl MarkerSet {
    /// Creates a marker set from explicit date sets.
    pub fn new(
        legal_holidays: BTreeSet<NaiveDate>,
        planning_days: BTreeSet<NaiveDate>,
        grading_dates: BTreeSet<NaiveDate>,
    ) -> Self {
        Self {
            legal_holidays,
            planning_days,
            grading_dates,
        }
    }

    /// Takes the legal-holiday, planning and grading sets of `policy`.
    pub fn from_policy(policy: &CalendarPolicy) -> Self {
        Self::new(
            policy.legal_holidays().clone(),
            policy.planning_days().clone(),
            policy.grading_dates().clone(),
        )
    }

    /// Dates marked with a cross.
    pub fn legal_holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.legal_holidays
    }

    /// Dates marked with a ring.
    pub fn planning_days(&self) -> &BTreeSet<NaiveDate> {
        &self.planning_days
    }

    /// Dates whose cell is outlined.
    pub fn grading_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.grading_dates
    }
}

/// A marker positioned on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// Diagonal cross centered on a legal holiday.
    Cross {
        date: NaiveDate,
        center: Point,
        half: f32,
        width: f32,
    },
    /// Circle centered on a planning day.
    Ring {
        date: NaiveDate,
        center: Point,
        radius: f32,
        width: f32,
    },
    /// Unfilled rectangle framing a grading-period boundary.
    Outline {
        date: NaiveDate,
        rect: Rect,
        width: f32,
    },
}

impl Overlay {
    /// The date this marker belongs to.
    pub fn date(&self) -> NaiveDate {
        match *self {
            Overlay::Cross { date, .. } | Overlay::Ring { date, .. } | Overlay::Outline { date, .. } => {
                date
            }
        }
    }
}

/// Places one overlay per marked date that has a rendered cell.
///
/// Crosses come first, then rings, then outlines, each in date order.
/// Dates outside every laid-out month are skipped.
pub fn place_overlays(
    layout: &MeasuredLayout,
    markers: &MarkerSet,
    config: &RenderConfig,
) -> Vec<Overlay> {
    let size = config.fonts().marker;
    let stroke = MARKER_STROKE * size;
    let mut overlays = Vec::new();

    let mut place = |dates: &BTreeSet<NaiveDate>, kind: &str, make: &dyn Fn(NaiveDate, Rect) -> Overlay| {
        for &date in dates {
            match layout.cell_box(date) {
                Some(rect) => overlays.push(make(date, rect)),
                None => trace!(%date, kind, "no rendered cell, skipping marker"),
            }
        }
    };

    place(markers.legal_holidays(), "cross", &|date, rect| Overlay::Cross {
        date,
        center: rect.center(),
        half: CROSS_HALF * size,
        width: stroke,
    });
    place(markers.planning_days(), "ring", &|date, rect| Overlay::Ring {
        date,
        center: rect.center(),
        radius: RING_RADIUS * size,
        width: stroke,
    });
    place(markers.grading_dates(), "outline", &|date, rect| Overlay::Outline {
        date,
        rect,
        width: config.grading_outline_width(),
    });

    debug!(n_overlays = overlays.len(), "placed overlays");
    overlays
}
