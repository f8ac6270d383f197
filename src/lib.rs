//! # Trueno-Raster
//!
//! Integer-only software rasterizer over a packed RGB565 framebuffer.
//!
//! A caller sets a color, then invokes a primitive. Each primitive validates
//! its arguments against the framebuffer extents and either writes its whole
//! shape or fails with a typed error before touching a single cell.
//!
//! ## Features
//!
//! - **Integer-only**: Bresenham lines and midpoint circles, no floating point
//! - **Whole-or-nothing**: no clipping, no partial shapes on error
//! - **Explicit state**: the drawing color lives in a [`render::DrawContext`], not a global
//! - **Pluggable targets**: anything implementing [`render::PixelSink`] can be drawn on
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut screen = Screen::init(64, 32)?;
//! screen.set_color(0xFF, 0x00, 0x00);
//! screen.draw_circle(16, 16, 8)?;
//! screen.draw_line(0, 0, 63, 31)?;
//!
//! // An off-screen shape is rejected and nothing is drawn.
//! assert!(screen.draw_rectangle(60, 0, 70, 4).is_err());
//!
//! let cells: &[u16] = screen.framebuffer().as_raw();
//! assert_eq!(cells[16 * 64 + 16], 0xF800);
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Packed 16-bit color model.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, lines, rectangles, circles).
pub mod geometry;

/// Whole-or-nothing coordinate validation.
pub mod bounds;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms and the drawing context.
pub mod render;

/// Framebuffer plus drawing context behind the host screen API.
pub mod screen;

// ============================================================================
// Ambient Modules
// ============================================================================

/// YAML screen configuration.
pub mod config;

/// Opt-in debug logging.
pub mod debug;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bounds::Extent;
    pub use crate::color::{Color565, Rgb};
    pub use crate::config::ScreenConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, Line, Point, Rect};
    pub use crate::render::{
        draw_circle, draw_line, draw_pixel, draw_rectangle, DrawContext, Drawable, PixelSink,
    };
    pub use crate::screen::Screen;
}
