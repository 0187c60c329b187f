//! SVG view of a [`Figure`].

use svg::Document;
use svg::node::element::{Circle, Group, Line, Rectangle, Text};

use crate::figure::{Align, Figure, Shape, Stroke};

/// Font stack used for all text when none is given.
pub const DEFAULT_FONT_FAMILY: &str =
    "Helvetica, Arial, 'Liberation Sans', 'DejaVu Sans', sans-serif";

fn with_stroke<T: svg::Node>(mut node: T, stroke: Option<Stroke>) -> T {
    match stroke {
        Some(s) => {
            node.assign("stroke", s.color.to_string());
            node.assign("stroke-width", s.width);
        }
        None => node.assign("stroke", "none"),
    }
    node
}

fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
}

/// Builds an SVG document whose user units are page points, using
/// [`DEFAULT_FONT_FAMILY`].
pub fn to_svg(figure: &Figure) -> Document {
    to_svg_with_font(figure, DEFAULT_FONT_FAMILY)
}

/// Builds an SVG document using `font_family` for every text element.
///
/// A white page-sized rectangle is painted first; shapes follow in figure
/// order.
pub fn to_svg_with_font(figure: &Figure, font_family: &str) -> Document {
    let (w, h) = (figure.width(), figure.height());
    let mut document = Document::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", (0, 0, w, h))
        .set("font-family", font_family)
        .add(
            Rectangle::new()
                .set("width", w)
                .set("height", h)
                .set("fill", "#ffffff"),
        );

    for shape in figure.shapes() {
        document = match shape {
            Shape::Rect { rect, fill, stroke } => {
                let node = Rectangle::new()
                    .set("x", rect.x)
                    .set("y", rect.y)
                    .set("width", rect.width)
                    .set("height", rect.height)
                    .set(
                        "fill",
                        fill.map_or_else(|| "none".to_string(), |c| c.to_string()),
                    );
                document.add(with_stroke(node, *stroke))
            }
            Shape::Text {
                anchor,
                content,
                size,
                align,
            } => {
                let text_anchor = match align {
                    Align::Start => "start",
                    Align::Middle => "middle",
                };
                document.add(
                    Text::new(content.as_str())
                        .set("x", anchor.x)
                        .set("y", anchor.y)
                        .set("font-size", *size)
                        .set("text-anchor", text_anchor)
                        .set("fill", "#000000"),
                )
            }
            Shape::Cross {
                center,
                half,
                stroke,
            } => {
                let (x, y, d) = (center.x, center.y, *half);
                let group = Group::new()
                    .set("stroke-linecap", "round")
                    .add(line(x - d, y - d, x + d, y + d))
                    .add(line(x - d, y + d, x + d, y - d));
                document.add(with_stroke(group, Some(*stroke)))
            }
            Shape::Ring {
                center,
                radius,
                stroke,
            } => {
                let node = Circle::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("r", *radius)
                    .set("fill", "none");
                document.add(with_stroke(node, Some(*stroke)))
            }
        };
    }
    document
}
