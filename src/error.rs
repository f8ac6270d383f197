//! Error types for trueno-raster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Host error code raised by `drawPixel` with illegal coordinates.
pub const CODE_ILLEGAL_PIXEL: i16 = 7;
/// Host error code raised by `drawLine` with illegal coordinates.
pub const CODE_ILLEGAL_LINE: i16 = 8;
/// Host error code raised by `drawRectangle` with illegal coordinates.
pub const CODE_ILLEGAL_RECTANGLE: i16 = 9;
/// Host error code raised by `drawCircle` with an off-screen center.
pub const CODE_ILLEGAL_CIRCLE_CENTER: i16 = 12;
/// Host error code raised by `drawCircle` with a radius reaching off-screen.
pub const CODE_ILLEGAL_CIRCLE_RADIUS: i16 = 13;

/// Errors that can occur in trueno-raster operations.
///
/// Draw errors are raised before any framebuffer write, so a failed
/// primitive never leaves a partial shape behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `draw_pixel` called outside the framebuffer.
    #[error("Illegal pixel coordinates: ({x}, {y})")]
    IllegalPixelCoordinates {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
    },

    /// `draw_line` called with an endpoint outside the framebuffer.
    #[error("Illegal line coordinates: ({x1}, {y1}) -> ({x2}, {y2})")]
    IllegalLineCoordinates {
        /// Start X.
        x1: i32,
        /// Start Y.
        y1: i32,
        /// End X.
        x2: i32,
        /// End Y.
        y2: i32,
    },

    /// `draw_rectangle` called with unordered or out-of-bounds corners.
    #[error("Illegal rectangle coordinates: ({x1}, {y1}) -> ({x2}, {y2})")]
    IllegalRectangleCoordinates {
        /// Left X.
        x1: i32,
        /// Top Y.
        y1: i32,
        /// Right X.
        x2: i32,
        /// Bottom Y.
        y2: i32,
    },

    /// `draw_circle` called with a center outside the framebuffer.
    #[error("Illegal circle center: ({x}, {y})")]
    IllegalCircleCenter {
        /// Center X.
        x: i32,
        /// Center Y.
        y: i32,
    },

    /// `draw_circle` called with a radius whose bounding box leaves the framebuffer.
    #[error("Illegal circle radius {radius} at ({x}, {y})")]
    IllegalCircleRadius {
        /// Center X.
        x: i32,
        /// Center Y.
        y: i32,
        /// Radius.
        radius: i32,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Bulk content does not match the framebuffer size.
    #[error("Content length mismatch: expected {expected} cells, got {actual}")]
    ContentLength {
        /// Framebuffer cell count.
        expected: usize,
        /// Provided cell count.
        actual: usize,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// Offending key.
        key: String,
        /// Why the value is invalid.
        message: String,
    },
}

impl Error {
    /// Host error code for draw failures, `None` for everything else.
    #[must_use]
    pub const fn code(&self) -> Option<i16> {
        match self {
            Self::IllegalPixelCoordinates { .. } => Some(CODE_ILLEGAL_PIXEL),
            Self::IllegalLineCoordinates { .. } => Some(CODE_ILLEGAL_LINE),
            Self::IllegalRectangleCoordinates { .. } => Some(CODE_ILLEGAL_RECTANGLE),
            Self::IllegalCircleCenter { .. } => Some(CODE_ILLEGAL_CIRCLE_CENTER),
            Self::IllegalCircleRadius { .. } => Some(CODE_ILLEGAL_CIRCLE_RADIUS),
            _ => None,
        }
    }

    /// Returns true if this error came from primitive validation.
    #[must_use]
    pub const fn is_draw_error(&self) -> bool {
        self.code().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_draw_error_codes_are_distinct() {
        let errors = [
            Error::IllegalPixelCoordinates { x: -1, y: 0 },
            Error::IllegalLineCoordinates { x1: 0, y1: 0, x2: 99, y2: 0 },
            Error::IllegalRectangleCoordinates { x1: 2, y1: 0, x2: 1, y2: 0 },
            Error::IllegalCircleCenter { x: -1, y: -1 },
            Error::IllegalCircleRadius { x: 1, y: 1, radius: 5 },
        ];
        let codes: Vec<i16> = errors.iter().filter_map(Error::code).collect();
        assert_eq!(codes, vec![7, 8, 9, 12, 13]);
        assert!(errors.iter().all(Error::is_draw_error));
    }

    #[test]
    fn test_non_draw_errors_have_no_code() {
        let err = Error::ContentLength { expected: 16, actual: 4 };
        assert_eq!(err.code(), None);
        assert!(err.to_string().contains("16"));
        assert!(err.to_string().contains('4'));
    }
}
