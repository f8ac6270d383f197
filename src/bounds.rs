//! Coordinate validation for the drawing primitives.
//!
//! Every primitive is checked as a whole before anything is written: a shape
//! that is only partly on screen is rejected, never clipped.

use crate::error::{Error, Result};

/// Drawable area of a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent {
    /// Create a new extent.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `(x, y)` lies inside the extent.
    ///
    /// Widened to `i64` so `x + r` style arguments never overflow.
    #[inline]
    #[must_use]
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Row-major index of an in-bounds point.
    #[inline]
    #[must_use]
    pub(crate) fn index(self, x: i64, y: i64) -> usize {
        debug_assert!(self.contains(x, y));
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Pixel: `0 <= x < W` and `0 <= y < H`.
pub fn check_pixel(extent: Extent, x: i32, y: i32) -> Result<()> {
    if extent.contains(x.into(), y.into()) {
        Ok(())
    } else {
        Err(Error::IllegalPixelCoordinates { x, y })
    }
}

/// Line: both endpoints in bounds.
pub fn check_line(extent: Extent, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
    if extent.contains(x1.into(), y1.into()) && extent.contains(x2.into(), y2.into()) {
        Ok(())
    } else {
        Err(Error::IllegalLineCoordinates { x1, y1, x2, y2 })
    }
}

/// Rectangle: ordered corners (`x1 <= x2`, `y1 <= y2`), both in bounds.
pub fn check_rectangle(extent: Extent, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
    let ordered = x1 <= x2 && y1 <= y2;
    if ordered && extent.contains(x1.into(), y1.into()) && extent.contains(x2.into(), y2.into()) {
        Ok(())
    } else {
        Err(Error::IllegalRectangleCoordinates { x1, y1, x2, y2 })
    }
}

/// Circle: center in bounds, then the whole `[x-r, x+r] x [y-r, y+r]` box.
///
/// The center is checked first so an off-screen center reports
/// [`Error::IllegalCircleCenter`] even when the radius is also bad.
/// A negative radius is rejected as [`Error::IllegalCircleRadius`].
pub fn check_circle(extent: Extent, x: i32, y: i32, radius: i32) -> Result<()> {
    if !extent.contains(x.into(), y.into()) {
        return Err(Error::IllegalCircleCenter { x, y });
    }

    let (cx, cy, r) = (i64::from(x), i64::from(y), i64::from(radius));
    if r < 0 || !extent.contains(cx - r, cy - r) || !extent.contains(cx + r, cy + r) {
        return Err(Error::IllegalCircleRadius { x, y, radius });
    }

    Ok(())
}
