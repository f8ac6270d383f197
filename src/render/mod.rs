//! Rasterization of the drawing primitives.
//!
//! Every primitive validates its whole argument list first and only then
//! writes, so a rejected call leaves the target untouched.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer error term, one pixel per step of the driving axis
//! - **Midpoint Circle**: filled by symmetric horizontal spans
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod context;
mod primitives;

pub use context::DrawContext;
pub use primitives::{draw_circle, draw_line, draw_pixel, draw_rectangle, Drawable, PixelSink};
