//! Export settings.

use termcal_render::DEFAULT_FONT_FAMILY;

use crate::error::ExportError;

/// Configuration for writing a figure to disk.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Raster resolution in dots per inch.
    dpi: u32,
    /// CSS font-family list used when rasterizing text.
    font_families: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dpi: 200,
            font_families: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl ExportConfig {
    /// Sets the raster resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets the font-family list used by the raster backend.
    pub fn with_font_families(mut self, families: impl Into<String>) -> Self {
        self.font_families = families.into();
        self
    }

    /// Returns the raster resolution.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Returns the font-family list.
    pub fn font_families(&self) -> &str {
        &self.font_families
    }

    /// Raster pixels per page point.
    pub fn scale(&self) -> f32 {
        self.dpi as f32 / termcal_render::POINTS_PER_INCH
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidConfig`] for a zero DPI or an empty
    /// font-family list.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.dpi == 0 {
            return Err(ExportError::InvalidConfig {
                reason: "dpi must be greater than 0".to_string(),
            });
        }
        if self.font_families.trim().is_empty() {
            return Err(ExportError::InvalidConfig {
                reason: "font_families must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
