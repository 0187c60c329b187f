//! Figure geometry and typography settings.

use chrono::Weekday;

use crate::error::RenderError;

/// Figure margins as fractions of the page, measured from the left and
/// bottom edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Left edge of the panel area.
    pub left: f32,
    /// Right edge of the panel area.
    pub right: f32,
    /// Bottom edge of the panel area; the legend lives below it.
    pub bottom: f32,
    /// Top edge of the panel area.
    pub top: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 0.02,
            right: 0.98,
            bottom: 0.18,
            top: 0.96,
        }
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// Month title above each panel.
    pub title: f32,
    /// Day numbers and weekday headers.
    pub cell: f32,
    /// Legend labels.
    pub legend: f32,
    /// Holiday and planning glyphs.
    pub marker: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 18.0,
            cell: 16.0,
            legend: 16.0,
            marker: 20.0,
        }
    }
}

/// Configuration for laying out and decorating the calendar figure.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Month panels per row.
    columns: usize,
    /// Side of one panel slot in inches; the page is `columns` by
    /// `rows` slots.
    panel_size_in: f32,
    margins: Margins,
    /// Horizontal gap between panels, as a fraction of the panel width.
    wspace: f32,
    /// Vertical gap between panels, as a fraction of the panel height.
    hspace: f32,
    /// Share of the panel height occupied by the table, measured from the
    /// panel bottom.
    table_height_frac: f32,
    /// Gap between the panel top and the title baseline, in points.
    title_pad: f32,
    fonts: FontSizes,
    first_weekday: Weekday,
    cell_edge_width: f32,
    grading_outline_width: f32,
    legend_columns: usize,
    /// Distance of the legend bottom from the page bottom, as a fraction of
    /// the page height.
    legend_anchor: f32,
    legend_outline_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            panel_size_in: 4.0,
            margins: Margins::default(),
            wspace: 0.3,
            hspace: 0.3,
            table_height_frac: 0.95,
            title_pad: 6.0,
            fonts: FontSizes::default(),
            first_weekday: Weekday::Sun,
            cell_edge_width: 1.0,
            grading_outline_width: 4.0,
            legend_columns: 4,
            legend_anchor: 0.02,
            legend_outline_width: 3.0,
        }
    }
}

impl RenderConfig {
    /// Sets the number of panels per row.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the panel slot size in inches.
    pub fn with_panel_size_in(mut self, inches: f32) -> Self {
        self.panel_size_in = inches;
        self
    }

    /// Sets the figure margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the horizontal and vertical panel spacing.
    pub fn with_spacing(mut self, wspace: f32, hspace: f32) -> Self {
        self.wspace = wspace;
        self.hspace = hspace;
        self
    }

    /// Sets the font sizes.
    pub fn with_fonts(mut self, fonts: FontSizes) -> Self {
        self.fonts = fonts;
        self
    }

    /// Sets the weekday shown in the first column.
    pub fn with_first_weekday(mut self, weekday: Weekday) -> Self {
        self.first_weekday = weekday;
        self
    }

    /// Sets the grading-boundary outline width in points.
    pub fn with_grading_outline_width(mut self, width: f32) -> Self {
        self.grading_outline_width = width;
        self
    }

    /// Sets the number of legend columns.
    pub fn with_legend_columns(mut self, columns: usize) -> Self {
        self.legend_columns = columns;
        self
    }

    /// Returns the number of panels per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the panel slot size in inches.
    pub fn panel_size_in(&self) -> f32 {
        self.panel_size_in
    }

    /// Returns the figure margins.
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Returns the horizontal panel spacing.
    pub fn wspace(&self) -> f32 {
        self.wspace
    }

    /// Returns the vertical panel spacing.
    pub fn hspace(&self) -> f32 {
        self.hspace
    }

    /// Returns the table's share of the panel height.
    pub fn table_height_frac(&self) -> f32 {
        self.table_height_frac
    }

    /// Returns the title padding in points.
    pub fn title_pad(&self) -> f32 {
        self.title_pad
    }

    /// Returns the font sizes.
    pub fn fonts(&self) -> FontSizes {
        self.fonts
    }

    /// Returns the first weekday column.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Returns the table cell edge width in points.
    pub fn cell_edge_width(&self) -> f32 {
        self.cell_edge_width
    }

    /// Returns the grading-boundary outline width in points.
    pub fn grading_outline_width(&self) -> f32 {
        self.grading_outline_width
    }

    /// Returns the number of legend columns.
    pub fn legend_columns(&self) -> usize {
        self.legend_columns
    }

    /// Returns the legend anchor as a fraction of the page height.
    pub fn legend_anchor(&self) -> f32 {
        self.legend_anchor
    }

    /// Returns the outline width of the grading legend swatch.
    pub fn legend_outline_width(&self) -> f32 {
        self.legend_outline_width
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidConfig`] for zero columns, non-positive
    /// or non-finite sizes, or margins that leave no drawable area.
    pub fn validate(&self) -> Result<(), RenderError> {
        let invalid = |reason: String| Err(RenderError::InvalidConfig { reason });

        if self.columns == 0 {
            return invalid("columns must be greater than 0".to_string());
        }
        if self.legend_columns == 0 {
            return invalid("legend_columns must be greater than 0".to_string());
        }
        let positive = [
            ("panel_size_in", self.panel_size_in),
            ("table_height_frac", self.table_height_frac),
            ("fonts.title", self.fonts.title),
            ("fonts.cell", self.fonts.cell),
            ("fonts.legend", self.fonts.legend),
            ("fonts.marker", self.fonts.marker),
            ("grading_outline_width", self.grading_outline_width),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{name} must be finite and > 0, got {value}"));
            }
        }
        if self.table_height_frac > 1.0 {
            return invalid(format!(
                "table_height_frac must be <= 1, got {}",
                self.table_height_frac
            ));
        }
        for (name, value) in [("wspace", self.wspace), ("hspace", self.hspace)] {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!("{name} must be finite and >= 0, got {value}"));
            }
        }
        let m = self.margins;
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if ![m.left, m.right, m.bottom, m.top].into_iter().all(in_unit) {
            return invalid(format!("margins must lie in [0, 1], got {m:?}"));
        }
        if m.left >= m.right || m.bottom >= m.top {
            return invalid(format!("margins leave no drawable area: {m:?}"));
        }
        Ok(())
    }
}
