//! Core framebuffer for pixel rendering.
//!
//! A fixed-size, row-major grid of packed RGB565 cells. The rasterizer is the
//! only writer; a display surface reads the cells through [`Framebuffer::as_raw`]
//! or [`Framebuffer::snapshot`] and polls [`Framebuffer::take_dirty`] to decide
//! when to repaint.

use crate::color::Color565;
use crate::error::{Error, Result};

/// Packed 16-bit framebuffer.
///
/// Cell `index` holds pixel `(index % width, index / width)`. Indexed access
/// performs no validation of its own; the rasterizer checks coordinates
/// before it computes an index.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGB565 cells in row-major order.
    cells: Vec<u16>,
    /// Set on every mutation, cleared by `take_dirty`.
    dirty: bool,
}

impl Framebuffer {
    /// Create a new zero-filled framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(512, 256).unwrap();
    /// assert_eq!(fb.size(), 512 * 256);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize);

        Ok(Self {
            width,
            height,
            cells: vec![0; size],
            dirty: true,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Read the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Color565 {
        Color565::from_raw(self.cells[index])
    }

    /// Write the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    pub fn set(&mut self, index: usize, color: Color565) {
        self.cells[index] = color.raw();
        self.dirty = true;
    }

    /// Set every cell to 0 without reallocating.
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.dirty = true;
    }

    /// Replace every cell at once.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` does not hold exactly `size()` cells.
    pub fn set_contents(&mut self, values: &[u16]) -> Result<()> {
        if values.len() != self.cells.len() {
            return Err(Error::ContentLength {
                expected: self.cells.len(),
                actual: values.len(),
            });
        }
        self.cells.copy_from_slice(values);
        self.dirty = true;
        Ok(())
    }

    /// Row-major index of `(x, y)`, or `None` if outside the framebuffer.
    #[must_use]
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color565> {
        self.index_of(x, y).map(|idx| self.get(idx))
    }

    /// Flat row-major view of the raw cells.
    #[must_use]
    pub fn as_raw(&self) -> &[u16] {
        &self.cells
    }

    /// Copy of the current cells, for readers that need a consistent frame.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u16> {
        self.cells.clone()
    }

    /// Whether the contents changed since the last `take_dirty`.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the dirty flag and reset it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Number of cells that hold something other than 0.
    #[must_use]
    pub fn count_nonzero(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}
