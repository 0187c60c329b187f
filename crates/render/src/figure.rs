//! Backend-neutral drawing primitives.

use crate::geometry::{Point, Rect, Size};
use crate::layout::{CellKind, MeasuredLayout};
use crate::legend::Swatch;
use crate::metrics::baseline_offset;
use crate::overlay::Overlay;
use crate::palette::Rgb;

/// Line color and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

impl Stroke {
    /// A black stroke of the given width.
    pub fn black(width: f32) -> Self {
        Self {
            color: Rgb::BLACK,
            width,
        }
    }
}

/// Horizontal text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Anchor is the left end of the baseline.
    Start,
    /// Anchor is the middle of the baseline.
    Middle,
}

/// One drawing primitive in page points, origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle with optional fill and border.
    Rect {
        rect: Rect,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    /// A single line of black Helvetica text; `anchor` lies on the baseline.
    Text {
        anchor: Point,
        content: String,
        size: f32,
        align: Align,
    },
    /// Two diagonals of a square with half-side `half`.
    Cross {
        center: Point,
        half: f32,
        stroke: Stroke,
    },
    /// Unfilled circle.
    Ring {
        center: Point,
        radius: f32,
        stroke: Stroke,
    },
}

/// A complete page ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    size: Size,
    shapes: Vec<Shape>,
}

impl Figure {
    /// Creates an empty figure.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            shapes: Vec::new(),
        }
    }

    /// Flattens a measured layout and its overlays into paint order: titles,
    /// table cells with their labels, legend, then overlays.
    pub fn compose(layout: &MeasuredLayout, overlays: &[Overlay]) -> Self {
        let mut figure = Self::new(layout.page());
        let fonts = layout.fonts();
        let edge = Some(Stroke::black(layout.cell_edge_width()));

        for panel in layout.panels() {
            figure.push(Shape::Text {
                anchor: panel.title_anchor,
                content: panel.title.clone(),
                size: fonts.title,
                align: Align::Middle,
            });
            for cell in &panel.cells {
                figure.push(Shape::Rect {
                    rect: cell.rect,
                    fill: Some(cell.fill),
                    stroke: edge,
                });
                if cell.kind != CellKind::Padding {
                    let center = cell.rect.center();
                    figure.push(Shape::Text {
                        anchor: Point::new(center.x, center.y + baseline_offset(fonts.cell)),
                        content: cell.label.clone(),
                        size: fonts.cell,
                        align: Align::Middle,
                    });
                }
            }
        }

        let legend = layout.legend();
        for item in &legend.items {
            let (fill, stroke) = match item.swatch {
                Swatch::Fill(color) => (Some(color), None),
                Swatch::Outline(width) => (None, Some(Stroke::black(width))),
            };
            figure.push(Shape::Rect {
                rect: item.swatch_rect,
                fill,
                stroke,
            });
            figure.push(Shape::Text {
                anchor: item.label_anchor,
                content: item.label.to_string(),
                size: legend.font_size,
                align: Align::Start,
            });
        }

        for overlay in overlays {
            figure.push(match *overlay {
                Overlay::Cross {
                    center, half, width, ..
                } => Shape::Cross {
                    center,
                    half,
                    stroke: Stroke::black(width),
                },
                Overlay::Ring {
                    center,
                    radius,
                    width,
                    ..
                } => Shape::Ring {
                    center,
                    radius,
                    stroke: Stroke::black(width),
                },
                Overlay::Outline { rect, width, .. } => Shape::Rect {
                    rect,
                    fill: None,
                    stroke: Some(Stroke::black(width)),
                },
            });
        }

        figure
    }

    /// Appends a shape on top of the existing ones.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Page size in points.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Page width in points.
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Page height in points.
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
