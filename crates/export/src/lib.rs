//! # termcal-export
//!
//! Writes a rendered [`Figure`] as a raster PNG and a vector PDF sharing one
//! basename.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     F["Figure"] -->|"to_svg_with_font()"| S["SVG text"]
//!     S -->|"usvg + resvg"| P["Pixmap"]
//!     P -->|"png::Encoder"| PNG[".png"]
//!     F -->|"pdf-writer"| PDF[".pdf"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use termcal_export::{ExportConfig, export, output_stem};
//!
//! let stem = output_stem(2025, 2026);
//! let files = export(&figure, "out".as_ref(), &stem, &ExportConfig::default())?;
//! println!("{}", files.png.display());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | DPI and raster font settings |
//! | `raster` | SVG rasterization and PNG encoding |
//! | `pdf` | Single-page PDF writer |
//! | `error` | Error types |

mod config;
mod error;
mod pdf;
mod raster;

use std::path::{Path, PathBuf};

use termcal_render::Figure;
use tracing::info;

pub use config::ExportConfig;
pub use error::ExportError;
pub use pdf::{render_pdf, write_pdf};
pub use raster::{raster_size, write_png};

/// Paths of the files written by [`export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    /// Raster output.
    pub png: PathBuf,
    /// Vector output.
    pub pdf: PathBuf,
}

/// Basename shared by both outputs, e.g. `academic_calendar_2025_2026`.
pub fn output_stem(start_year: i32, end_year: i32) -> String {
    format!("academic_calendar_{start_year}_{end_year}")
}

/// Writes `<dir>/<stem>.png` and `<dir>/<stem>.pdf`.
///
/// The directory must already exist.
///
/// # Errors
///
/// Returns [`ExportError::InvalidConfig`] for an invalid `config`, and any
/// error from [`write_png`] or [`write_pdf`].
pub fn export(
    figure: &Figure,
    dir: &Path,
    stem: &str,
    config: &ExportConfig,
) -> Result<ExportedFiles, ExportError> {
    config.validate()?;
    let files = ExportedFiles {
        png: dir.join(format!("{stem}.png")),
        pdf: dir.join(format!("{stem}.pdf")),
    };
    write_png(&files.png, figure, config)?;
    info!(path = %files.png.display(), dpi = config.dpi(), "saved raster calendar");
    write_pdf(&files.pdf, figure)?;
    info!(path = %files.pdf.display(), "saved vector calendar");
    Ok(files)
}
