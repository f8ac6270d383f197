//! Drawing state shared by the primitives.

use crate::color::Color565;

/// The current drawing color.
///
/// Each context is independent, so several framebuffers can be drawn with
/// different colors side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawContext {
    color: Color565,
}

impl Default for DrawContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawContext {
    /// A context drawing in white.
    #[must_use]
    pub const fn new() -> Self {
        Self { color: Color565::WHITE }
    }

    /// A context drawing in `color`.
    #[must_use]
    pub const fn with_color(color: Color565) -> Self {
        Self { color }
    }

    /// Set the drawing color from 8-bit channels.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = Color565::pack(r, g, b);
    }

    /// Set the drawing color from a packed value.
    pub fn set_raw(&mut self, color: Color565) {
        self.color = color;
    }

    /// The current drawing color.
    #[must_use]
    pub const fn color(&self) -> Color565 {
        self.color
    }

    /// Back to white.
    pub fn reset(&mut self) {
        self.color = Color565::WHITE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(DrawContext::default().color(), Color565::WHITE);
    }

    #[test]
    fn test_set_and_reset() {
        let mut ctx = DrawContext::new();
        ctx.set_color(0xFF, 0, 0);
        assert_eq!(ctx.color().raw(), 0xF800);

        ctx.set_raw(Color565::BLACK);
        assert_eq!(ctx.color(), Color565::BLACK);

        ctx.reset();
        assert_eq!(ctx.color(), Color565::WHITE);
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut a = DrawContext::new();
        let b = DrawContext::with_color(Color565::from_raw(0x1234));
        a.set_color(0, 0, 0);
        assert_eq!(a.color(), Color565::BLACK);
        assert_eq!(b.color().raw(), 0x1234);
    }
}
