//! Single-page vector PDF output.

use std::fs;
use std::path::Path;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use termcal_render::{Align, Figure, Point, Rgb, Shape, Stroke, text_width};
use tracing::debug;

use crate::error::ExportError;

const FONT_NAME: Name<'static> = Name(b"F1");

/// Control-point factor for approximating a quarter circle with one cubic.
const KAPPA: f32 = 0.552_284_8;

/// Maps page points (origin top-left) to PDF user space (origin
/// bottom-left).
struct Flip {
    height: f32,
}

impl Flip {
    fn y(&self, y: f32) -> f32 {
        self.height - y
    }
}

fn set_fill(content: &mut Content, color: Rgb) {
    let [r, g, b] = color.to_unit();
    content.set_fill_rgb(r, g, b);
}

fn set_stroke(content: &mut Content, stroke: Stroke) {
    let [r, g, b] = stroke.color.to_unit();
    content.set_stroke_rgb(r, g, b);
    content.set_line_width(stroke.width);
}

/// Encodes text for a base-14 font; characters outside printable ASCII
/// become `?`.
fn latin_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (' '..='~').contains(&c) { c as u8 } else { b'?' })
        .collect()
}

/// Left end of the baseline for text aligned on `anchor_x`.
fn text_origin_x(anchor_x: f32, text: &str, size: f32, align: Align) -> f32 {
    match align {
        Align::Start => anchor_x,
        Align::Middle => anchor_x - text_width(text, size) / 2.0,
    }
}

fn draw_ring(content: &mut Content, center: Point, radius: f32) {
    let (cx, cy, r) = (center.x, center.y, radius);
    let k = KAPPA * r;
    content.move_to(cx + r, cy);
    content.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
}

/// Builds the page content stream for `figure`.
fn page_content(figure: &Figure) -> Vec<u8> {
    let flip = Flip {
        height: figure.height(),
    };
    let mut content = Content::new();

    set_fill(&mut content, Rgb::WHITE);
    content.rect(0.0, 0.0, figure.width(), figure.height());
    content.fill_nonzero();

    for shape in figure.shapes() {
        content.save_state();
        match shape {
            Shape::Rect { rect, fill, stroke } => {
                let y = flip.y(rect.bottom());
                if let Some(color) = fill {
                    set_fill(&mut content, *color);
                    content.rect(rect.x, y, rect.width, rect.height);
                    content.fill_nonzero();
                }
                if let Some(stroke) = stroke {
                    set_stroke(&mut content, *stroke);
                    content.rect(rect.x, y, rect.width, rect.height);
                    content.stroke();
                }
            }
            Shape::Text {
                anchor,
                content: text,
                size,
                align,
            } => {
                let x = text_origin_x(anchor.x, text, *size, *align);
                set_fill(&mut content, Rgb::BLACK);
                content.begin_text();
                content.set_font(FONT_NAME, *size);
                content.next_line(x, flip.y(anchor.y));
                content.show(Str(&latin_bytes(text)));
                content.end_text();
            }
            Shape::Cross {
                center,
                half,
                stroke,
            } => {
                let (x, y) = (center.x, flip.y(center.y));
                set_stroke(&mut content, *stroke);
                content.move_to(x - half, y - half);
                content.line_to(x + half, y + half);
                content.move_to(x - half, y + half);
                content.line_to(x + half, y - half);
                content.stroke();
            }
            Shape::Ring {
                center,
                radius,
                stroke,
            } => {
                set_stroke(&mut content, *stroke);
                draw_ring(&mut content, Point::new(center.x, flip.y(center.y)), *radius);
                content.stroke();
            }
        }
        content.restore_state();
    }
    content.finish()
}

/// Serializes `figure` as a one-page PDF document.
pub fn render_pdf(figure: &Figure, title: &str) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);
    let info_id = Ref::new(6);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.parent(page_tree_id)
        .media_box(Rect::new(0.0, 0.0, figure.width(), figure.height()))
        .contents(content_id);
    page.resources().fonts().pair(FONT_NAME, font_id);
    page.finish();

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.document_info(info_id)
        .title(TextStr(title))
        .producer(TextStr("termcal"));

    let data = page_content(figure);
    pdf.stream(content_id, &data);
    pdf.finish()
}

/// Writes `figure` as a single-page PDF sized to the figure in points.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be
/// written.
pub fn write_pdf(path: &Path, figure: &Figure) -> Result<(), ExportError> {
    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let data = render_pdf(figure, &title);
    fs::write(path, &data).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), bytes = data.len(), "wrote PDF");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use termcal_render::Size;

    fn figure() -> Figure {
        let mut figure = Figure::new(Size {
            width: 200.0,
            height: 100.0,
        });
        figure.push(Shape::Rect {
            rect: termcal_render::Rect::new(10.0, 10.0, 30.0, 20.0),
            fill: Some(Rgb::new(0x2e, 0xcc, 0x71)),
            stroke: Some(Stroke::black(1.0)),
        });
        figure.push(Shape::Text {
            anchor: Point::new(25.0, 24.0),
            content: "14".to_string(),
            size: 16.0,
            align: Align::Middle,
        });
        figure.push(Shape::Cross {
            center: Point::new(25.0, 20.0),
            half: 6.0,
            stroke: Stroke::black(1.5),
        });
        figure
    }

    #[test]
    fn document_header_and_trailer() {
        let data = render_pdf(&figure(), "test");
        assert!(data.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&data[data.len() - 16..]).into_owned();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn media_box_matches_figure() {
        let data = render_pdf(&figure(), "test");
        let text = String::from_utf8_lossy(&data);
        assert!(text.contains("/MediaBox [0 0 200 100]"));
        assert!(text.contains("/BaseFont /Helvetica"));
    }

    #[test]
    fn content_is_flipped_and_centered() {
        let content = String::from_utf8_lossy(&page_content(&figure())).into_owned();
        // Rectangle bottom at y = 30 in page space, so 70 in PDF space.
        assert!(content.contains("10 70 30 20 re"));
        assert!(content.contains(" 76 Td"));
        assert!(content.contains("(14) Tj"));
    }

    #[test]
    fn middle_aligned_text_is_centered() {
        // "14" is 17.792 pt wide at 16 pt.
        assert_relative_eq!(text_origin_x(25.0, "14", 16.0, Align::Middle), 16.104, epsilon = 1e-4);
        assert_relative_eq!(text_origin_x(25.0, "14", 16.0, Align::Start), 25.0);
    }

    #[test]
    fn non_ascii_is_replaced() {
        assert_eq!(latin_bytes("Août"), b"Ao?t".to_vec());
    }
}
