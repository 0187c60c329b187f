//! Error types for termcal-export.

use std::path::PathBuf;

/// Error type for all fallible operations in the termcal-export crate.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Returned when an export configuration value is out of range.
    #[error("invalid export configuration: {reason}")]
    InvalidConfig {
        /// Description of the invalid setting.
        reason: String,
    },

    /// Returned when an output file cannot be created or written.
    #[error("cannot write {}: {reason}", path.display())]
    Io {
        /// Path of the output file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps an error raised while parsing the intermediate SVG.
    #[error("svg error: {reason}")]
    Svg {
        /// Description of the underlying parse failure.
        reason: String,
    },

    /// Wraps an error originating from the PNG encoder.
    #[error("png error: {reason}")]
    Png {
        /// Description of the underlying encoding failure.
        reason: String,
    },

    /// Returned when the raster target cannot be allocated.
    #[error("raster error: {reason}")]
    Raster {
        /// Description of the allocation failure.
        reason: String,
    },
}

impl From<resvg::usvg::Error> for ExportError {
    fn from(e: resvg::usvg::Error) -> Self {
        ExportError::Svg {
            reason: e.to_string(),
        }
    }
}

impl From<png::EncodingError> for ExportError {
    fn from(e: png::EncodingError) -> Self {
        ExportError::Png {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_config() {
        let err = ExportError::InvalidConfig {
            reason: "dpi must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid export configuration: dpi must be greater than 0"
        );
    }

    #[test]
    fn display_io() {
        let err = ExportError::Io {
            path: PathBuf::from("/nope/academic_calendar_2025_2026.png"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot write /nope/academic_calendar_2025_2026.png: permission denied"
        );
    }

    #[test]
    fn display_svg() {
        let err = ExportError::Svg {
            reason: "unexpected end".to_string(),
        };
        assert_eq!(err.to_string(), "svg error: unexpected end");
    }

    #[test]
    fn display_raster() {
        let err = ExportError::Raster {
            reason: "zero-sized pixmap".to_string(),
        };
        assert_eq!(err.to_string(), "raster error: zero-sized pixmap");
    }

    #[test]
    fn from_usvg_error() {
        let err: ExportError = resvg::usvg::Error::ElementsLimitReached.into();
        assert!(matches!(err, ExportError::Svg { .. }));
    }

    #[test]
    fn from_png_error() {
        let io = std::io::Error::other("disk full");
        let err: ExportError = png::EncodingError::IoError(io).into();
        assert!(matches!(err, ExportError::Png { .. }));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExportError>();
    }
}
