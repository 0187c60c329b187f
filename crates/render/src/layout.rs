//! Phase one: measured page layout of month panels and the legend.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use termcal_calendar::{Classification, MonthGrid, YearMonth};
use tracing::debug;

use crate::config::{FontSizes, RenderConfig};
use crate::error::RenderError;
use crate::geometry::{POINTS_PER_INCH, Point, Rect, Size};
use crate::legend::{Legend, lay_out_legend, legend_entries};
use crate::palette::{ColorTable, Rgb};

/// What a table cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Weekday header in the first row.
    Header,
    /// A day of the panel's month.
    Day(NaiveDate),
    /// Empty slot before the first or after the last day.
    Padding,
}

/// One measured table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Cell rectangle on the page.
    pub rect: Rect,
    /// Cell content kind.
    pub kind: CellKind,
    /// Background color.
    pub fill: Rgb,
    /// Text centered in the cell; empty for padding.
    pub label: String,
}

/// One month's title and table.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthPanel {
    /// The month shown.
    pub year_month: YearMonth,
    /// Panel slot on the page.
    pub frame: Rect,
    /// Title text, e.g. `August '25`.
    pub title: String,
    /// Center of the title baseline.
    pub title_anchor: Point,
    /// Header row first, then the weeks, each left to right.
    pub cells: Vec<TableCell>,
}

/// Result of phase one: every panel, cell and legend entry at its final
/// position, plus a date index for overlay placement.
#[derive(Debug, Clone)]
pub struct MeasuredLayout {
    page: Size,
    panels: Vec<MonthPanel>,
    legend: Legend,
    fonts: FontSizes,
    cell_edge_width: f32,
    cell_index: HashMap<NaiveDate, Rect>,
}

impl MeasuredLayout {
    /// Page size in points.
    pub fn page(&self) -> Size {
        self.page
    }

    /// Month panels in input order.
    pub fn panels(&self) -> &[MonthPanel] {
        &self.panels
    }

    /// The legend block.
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Font sizes the layout was measured with.
    pub fn fonts(&self) -> FontSizes {
        self.fonts
    }

    /// Border width of table cells.
    pub fn cell_edge_width(&self) -> f32 {
        self.cell_edge_width
    }

    /// Returns the rectangle of the cell showing `date`, or `None` when no
    /// laid-out month contains it.
    pub fn cell_box(&self, date: NaiveDate) -> Option<Rect> {
        self.cell_index.get(&date).copied()
    }
}

/// Panel and gap sizes along one axis, matching a subplot grid of `n`
/// slots spread over `extent` with `space` as the gap-to-panel ratio.
fn panel_extent(extent: f32, n: usize, space: f32) -> (f32, f32) {
    let n = n as f32;
    let panel = extent / (n + space * (n - 1.0));
    (panel, panel * space)
}

/// Computes page size, panel frames, table cells and the legend.
///
/// Months are placed row-major, `config.columns()` per row. The page is
/// always `columns` panel slots wide, even when the last row is partial.
///
/// # Errors
///
/// Returns [`RenderError::InvalidConfig`] if `config` is invalid,
/// [`RenderError::NoMonths`] if `months` is empty, and
/// [`RenderError::Calendar`] if a month grid cannot be built.
pub fn lay_out(
    classification: &Classification,
    months: &[YearMonth],
    colors: &ColorTable,
    config: &RenderConfig,
) -> Result<MeasuredLayout, RenderError> {
    config.validate()?;
    if months.is_empty() {
        return Err(RenderError::NoMonths);
    }

    let columns = config.columns();
    let rows = months.len().div_ceil(columns);
    let slot = config.panel_size_in() * POINTS_PER_INCH;
    let page = Size {
        width: columns as f32 * slot,
        height: rows as f32 * slot,
    };

    let m = config.margins();
    let (panel_w, gap_w) = panel_extent((m.right - m.left) * page.width, columns, config.wspace());
    let (panel_h, gap_h) = panel_extent((m.top - m.bottom) * page.height, rows, config.hspace());
    let fonts = config.fonts();

    let mut panels = Vec::with_capacity(months.len());
    let mut cell_index = HashMap::new();

    for (i, &year_month) in months.iter().enumerate() {
        let (row, col) = (i / columns, i % columns);
        let frame = Rect::new(
            m.left * page.width + col as f32 * (panel_w + gap_w),
            (1.0 - m.top) * page.height + row as f32 * (panel_h + gap_h),
            panel_w,
            panel_h,
        );

        let grid = MonthGrid::new(year_month, config.first_weekday())?;
        let table_h = config.table_height_frac() * panel_h;
        let table_top = frame.bottom() - table_h;
        let cell_w = panel_w / 7.0;
        let cell_h = table_h / (grid.n_weeks() + 1) as f32;
        let cell_rect = |r: usize, c: usize| {
            Rect::new(
                frame.x + c as f32 * cell_w,
                table_top + r as f32 * cell_h,
                cell_w,
                cell_h,
            )
        };

        let mut cells = Vec::with_capacity(7 * (grid.n_weeks() + 1));
        for (c, header) in grid.headers().into_iter().enumerate() {
            cells.push(TableCell {
                rect: cell_rect(0, c),
                kind: CellKind::Header,
                fill: Rgb::WHITE,
                label: header.to_string(),
            });
        }
        for (r, week) in grid.weeks().iter().enumerate() {
            for (c, slot) in week.iter().enumerate() {
                let rect = cell_rect(r + 1, c);
                let cell = match *slot {
                    Some(date) => {
                        cell_index.insert(date, rect);
                        TableCell {
                            rect,
                            kind: CellKind::Day(date),
                            fill: colors.fill(classification.get(date)),
                            label: date.day().to_string(),
                        }
                    }
                    None => TableCell {
                        rect,
                        kind: CellKind::Padding,
                        fill: Rgb::WHITE,
                        label: String::new(),
                    },
                };
                cells.push(cell);
            }
        }

        panels.push(MonthPanel {
            year_month,
            frame,
            title: year_month.title()?,
            title_anchor: Point::new(frame.x + panel_w / 2.0, frame.y - config.title_pad()),
            cells,
        });
    }

    let legend = lay_out_legend(legend_entries(colors, config), page, config);

    debug!(
        n_months = panels.len(),
        rows,
        columns,
        width = page.width,
        height = page.height,
        n_cells = cell_index.len(),
        "laid out calendar page"
    );

    Ok(MeasuredLayout {
        page,
        panels,
        legend,
        fonts,
        cell_edge_width: config.cell_edge_width(),
        cell_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use termcal_calendar::{CalendarPolicy, DayType, classify, months_between, ymd};

    fn small_policy() -> CalendarPolicy {
        CalendarPolicy::new(ymd(2025, 8, 14).unwrap(), ymd(2025, 9, 30).unwrap())
            .with_legal_holidays([ymd(2025, 9, 1).unwrap()])
    }

    fn small_layout() -> MeasuredLayout {
        let policy = small_policy();
        let months = months_between(policy.academic_start(), policy.last_day());
        lay_out(
            &classify(&policy),
            &months,
            &ColorTable::default(),
            &RenderConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn panel_extent_matches_subplot_grid() {
        let (w, gap) = panel_extent(100.0, 4, 0.0);
        assert_relative_eq!(w, 25.0);
        assert_relative_eq!(gap, 0.0);
        let (w, gap) = panel_extent(100.0, 1, 0.3);
        assert_relative_eq!(w, 100.0);
        assert_relative_eq!(gap, 30.0);
    }

    #[test]
    fn page_is_full_row_wide() {
        let layout = small_layout();
        assert_relative_eq!(layout.page().width, 4.0 * 288.0);
        assert_relative_eq!(layout.page().height, 288.0);
        assert_eq!(layout.panels().len(), 2);
    }

    #[test]
    fn header_row_comes_first() {
        let layout = small_layout();
        let august = &layout.panels()[0];
        let headers: Vec<_> = august.cells[..7].iter().map(|c| c.label.as_str()).collect();
        assert_eq!(headers, ["Su", "M", "T", "W", "Th", "F", "Sa"]);
        assert!(august.cells[..7].iter().all(|c| c.kind == CellKind::Header));
        // August 2025 spans six weeks.
        assert_eq!(august.cells.len(), 7 * 7);
    }

    #[test]
    fn day_cells_carry_classification_colors() {
        let layout = small_layout();
        let colors = ColorTable::default();
        let find = |date: NaiveDate| {
            layout
                .panels()
                .iter()
                .flat_map(|p| p.cells.iter())
                .find(|c| c.kind == CellKind::Day(date))
                .cloned()
                .unwrap()
        };
        let start = find(ymd(2025, 8, 14).unwrap());
        assert_eq!(start.fill, colors.color(DayType::C));
        assert_eq!(start.label, "14");
        assert_eq!(find(ymd(2025, 9, 1).unwrap()).fill, colors.color(DayType::Legal));
        // Before the window: unclassified, white.
        assert_eq!(find(ymd(2025, 8, 4).unwrap()).fill, Rgb::WHITE);
    }

    #[test]
    fn cell_box_lookup() {
        let layout = small_layout();
        let rect = layout.cell_box(ymd(2025, 8, 1).unwrap()).unwrap();
        let panel = &layout.panels()[0];
        assert!(panel.frame.contains_rect(&rect));
        // August 1, 2025 is a Friday: sixth column, first week row.
        assert_relative_eq!(rect.x, panel.frame.x + 5.0 * rect.width, epsilon = 1e-3);
        assert!(layout.cell_box(ymd(2025, 10, 1).unwrap()).is_none());
    }

    #[test]
    fn no_months_is_an_error() {
        let policy = small_policy();
        let result = lay_out(
            &classify(&policy),
            &[],
            &ColorTable::default(),
            &RenderConfig::default(),
        );
        assert_eq!(result.unwrap_err(), RenderError::NoMonths);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let policy = small_policy();
        let months = months_between(policy.academic_start(), policy.last_day());
        let result = lay_out(
            &classify(&policy),
            &months,
            &ColorTable::default(),
            &RenderConfig::default().with_columns(0),
        );
        assert!(matches!(result, Err(RenderError::InvalidConfig { .. })));
    }
}
