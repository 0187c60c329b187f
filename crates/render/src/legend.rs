//! Legend entries and their placement below the month panels.

use termcal_calendar::DayType;

use crate::config::RenderConfig;
use crate::geometry::{Point, Rect, Size};
use crate::metrics::{baseline_offset, text_width};
use crate::palette::{ColorTable, Rgb};

/// Swatch length, in em.
const HANDLE_LENGTH: f32 = 2.0;
/// Swatch height, in em.
const HANDLE_HEIGHT: f32 = 0.7;
/// Gap between swatch and label, in em.
const HANDLE_TEXT_PAD: f32 = 0.8;
/// Gap between legend columns, in em.
const COLUMN_SPACING: f32 = 2.0;
/// Vertical gap between legend rows, in em.
const LABEL_SPACING: f32 = 0.5;
/// Padding around the legend block, in em.
const BORDER_PAD: f32 = 0.4;

/// How a legend swatch is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swatch {
    /// Solid fill in the given color.
    Fill(Rgb),
    /// Unfilled box with a black border of the given width.
    Outline(f32),
}

/// A positioned legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    /// Swatch rectangle.
    pub swatch_rect: Rect,
    /// Swatch style.
    pub swatch: Swatch,
    /// Label text.
    pub label: &'static str,
    /// Left end of the label baseline.
    pub label_anchor: Point,
}

/// The laid-out legend.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Bounding box of the whole legend block, padding included.
    pub frame: Rect,
    /// Entries in display order.
    pub items: Vec<LegendItem>,
    /// Label font size.
    pub font_size: f32,
}

/// Legend entries in display order.
///
/// Weekend and generic holidays are white and carry no entry.
pub fn legend_entries(colors: &ColorTable, config: &RenderConfig) -> Vec<(&'static str, Swatch)> {
    vec![
        ("C Day", Swatch::Fill(colors.color(DayType::C))),
        (
            "Teacher Planning Day",
            Swatch::Fill(colors.color(DayType::Planning)),
        ),
        ("A Day", Swatch::Fill(colors.color(DayType::A))),
        ("B Day", Swatch::Fill(colors.color(DayType::B))),
        ("Legal Holiday", Swatch::Fill(colors.color(DayType::Legal))),
        ("Recess", Swatch::Fill(colors.color(DayType::Recess))),
        (
            "Start/End of Grading Period",
            Swatch::Outline(config.legend_outline_width()),
        ),
    ]
}

/// Places `entries` in a column-major grid centered horizontally, with its
/// bottom edge at `legend_anchor` of the page height.
///
/// Entries fill the first column top to bottom before moving to the next,
/// so seven entries over four columns give columns of 2, 2, 2 and 1.
pub fn lay_out_legend(
    entries: Vec<(&'static str, Swatch)>,
    page: Size,
    config: &RenderConfig,
) -> Legend {
    let font_size = config.fonts().legend;
    let em = font_size;
    let n = entries.len();
    let n_cols = config.legend_columns().min(n).max(1);
    let n_rows = n.div_ceil(n_cols);

    let swatch_w = HANDLE_LENGTH * em;
    let swatch_h = HANDLE_HEIGHT * em;
    let row_pitch = em * (1.0 + LABEL_SPACING);
    let pad = BORDER_PAD * em;

    // Column widths from the widest label in each column.
    let mut col_widths = vec![0.0f32; n_cols];
    for (i, (label, _)) in entries.iter().enumerate() {
        let col = i / n_rows;
        let w = swatch_w + HANDLE_TEXT_PAD * em + text_width(label, font_size);
        col_widths[col] = col_widths[col].max(w);
    }

    let content_w =
        col_widths.iter().sum::<f32>() + COLUMN_SPACING * em * (n_cols.saturating_sub(1)) as f32;
    let content_h = em * n_rows as f32 + LABEL_SPACING * em * (n_rows.saturating_sub(1)) as f32;
    let frame_w = content_w + 2.0 * pad;
    let frame_h = content_h + 2.0 * pad;
    let frame = Rect::new(
        (page.width - frame_w) / 2.0,
        page.height * (1.0 - config.legend_anchor()) - frame_h,
        frame_w,
        frame_h,
    );

    let mut col_x = Vec::with_capacity(n_cols);
    let mut x = frame.x + pad;
    for w in &col_widths {
        col_x.push(x);
        x += w + COLUMN_SPACING * em;
    }

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(i, (label, swatch))| {
            let col = i / n_rows;
            let row = i % n_rows;
            let center_y = frame.y + pad + row as f32 * row_pitch + em / 2.0;
            let left = col_x[col];
            LegendItem {
                swatch_rect: Rect::new(left, center_y - swatch_h / 2.0, swatch_w, swatch_h),
                swatch,
                label,
                label_anchor: Point::new(
                    left + swatch_w + HANDLE_TEXT_PAD * em,
                    center_y + baseline_offset(font_size),
                ),
            }
        })
        .collect();

    Legend {
        frame,
        items,
        font_size,
    }
}
