//! PNG output through resvg.

use std::fs;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, PixelDimensions, Unit};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use termcal_render::{Figure, to_svg_with_font};
use tracing::debug;

use crate::config::ExportConfig;
use crate::error::ExportError;

const INCHES_PER_METER: f64 = 39.3701;

/// Pixel size of `figure` rasterized at `config.dpi()`.
pub fn raster_size(figure: &Figure, config: &ExportConfig) -> (u32, u32) {
    let scale = config.scale();
    (
        (figure.width() * scale).round() as u32,
        (figure.height() * scale).round() as u32,
    )
}

/// Rasterizes `figure` onto a white RGBA pixmap.
fn rasterize(figure: &Figure, config: &ExportConfig) -> Result<Pixmap, ExportError> {
    let document = to_svg_with_font(figure, config.font_families()).to_string();

    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();
    debug!(n_faces = options.fontdb.len(), "loaded system fonts");
    let tree = Tree::from_str(&document, &options)?;

    let (width, height) = raster_size(figure, config);
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| ExportError::Raster {
        reason: format!("cannot allocate a {width}x{height} pixmap"),
    })?;
    pixmap.fill(Color::WHITE);
    let scale = config.scale();
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Encodes straight-alpha RGBA bytes as PNG with a pHYs chunk for `dpi`.
fn encode_png(
    rgba: &[u8],
    width: u32,
    height: u32,
    dpi: u32,
) -> Result<Vec<u8>, ExportError> {
    let ppm = (f64::from(dpi) * INCHES_PER_METER).round() as u32;
    let mut data = Vec::new();
    {
        let mut encoder = Encoder::new(&mut data, width, height);
        encoder.set_compression(Compression::Default);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba)?;
    }
    Ok(data)
}

/// Writes `figure` as a PNG at `config.dpi()`.
///
/// # Errors
///
/// Returns [`ExportError::Svg`] if the intermediate SVG cannot be parsed,
/// [`ExportError::Raster`] if the pixmap cannot be allocated,
/// [`ExportError::Png`] on encoding failure and [`ExportError::Io`] if the
/// file cannot be written.
pub fn write_png(path: &Path, figure: &Figure, config: &ExportConfig) -> Result<(), ExportError> {
    config.validate()?;
    let pixmap = rasterize(figure, config)?;

    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    let data = encode_png(&rgba, pixmap.width(), pixmap.height(), config.dpi())?;

    fs::write(path, &data).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(
        path = %path.display(),
        width = pixmap.width(),
        height = pixmap.height(),
        bytes = data.len(),
        "wrote PNG"
    );
    Ok(())
}
