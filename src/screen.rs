//! Screen facade: one framebuffer plus its drawing context.
//!
//! Mirrors the host OS screen API (`init`, `setColor`, `clearScreen` and the
//! four draw calls) over an owned [`Framebuffer`] and [`DrawContext`].

use crate::color::Color565;
use crate::config::ScreenConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::render::{self, DrawContext, Drawable};

const COMPONENT: &str = "screen";

/// A framebuffer with its own current color.
#[derive(Debug, Clone)]
pub struct Screen {
    framebuffer: Framebuffer,
    context: DrawContext,
}

impl Screen {
    /// Create a blank screen drawing in white.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn init(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            framebuffer: Framebuffer::new(width, height)?,
            context: DrawContext::new(),
        })
    }

    /// Create a screen from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimensions are invalid.
    pub fn from_config(config: &ScreenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            framebuffer: Framebuffer::new(config.width, config.height)?,
            context: DrawContext::with_color(config.color.packed()),
        })
    }

    /// Set the drawing color from 8-bit channels.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.context.set_color(r, g, b);
    }

    /// The current drawing color.
    #[must_use]
    pub const fn color(&self) -> Color565 {
        self.context.color()
    }

    /// Zero every cell. The drawing color is left alone.
    pub fn clear(&mut self) {
        crate::trace!(COMPONENT, "clear {}x{}", self.framebuffer.width(), self.framebuffer.height());
        self.framebuffer.clear();
    }

    /// Draw a single pixel.
    pub fn draw_pixel(&mut self, x: i32, y: i32) -> Result<()> {
        let result = render::draw_pixel(&mut self.framebuffer, &self.context, x, y);
        Self::report("draw_pixel", result)
    }

    /// Draw a line between two inclusive endpoints.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        let result = render::draw_line(&mut self.framebuffer, &self.context, x1, y1, x2, y2);
        Self::report("draw_line", result)
    }

    /// Draw a filled rectangle between two inclusive corners.
    pub fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        let result = render::draw_rectangle(&mut self.framebuffer, &self.context, x1, y1, x2, y2);
        Self::report("draw_rectangle", result)
    }

    /// Draw a filled circle.
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32) -> Result<()> {
        let result = render::draw_circle(&mut self.framebuffer, &self.context, x, y, radius);
        Self::report("draw_circle", result)
    }

    /// Draw any [`Drawable`] shape with the current color.
    pub fn draw(&mut self, shape: &dyn Drawable) -> Result<()> {
        let result = shape.draw(&mut self.framebuffer, &self.context);
        Self::report("draw", result)
    }

    /// Read access for the display surface.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Mutable access, e.g. for `take_dirty` or `set_contents`.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    fn report(op: &str, result: Result<()>) -> Result<()> {
        if let Err(err) = &result {
            crate::warn!(COMPONENT, "{op} rejected (code {:?}): {err}", err.code());
        }
        result
    }
}
