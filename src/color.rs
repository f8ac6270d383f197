//! Packed 16-bit color model.
//!
//! Colors are stored in the framebuffer as RGB565 words: 5 bits of red in the
//! high bits, 6 bits of green in the middle and 5 bits of blue in the low bits.
//! Packing truncates each 8-bit channel; decoding widens back to 8 bits
//! without replicating the high bits, so a round trip loses the low bits.

/// Red field mask of a packed color.
pub const RED_MASK: u16 = 0xF800;
/// Green field mask of a packed color.
pub const GREEN_MASK: u16 = 0x07E0;
/// Blue field mask of a packed color.
pub const BLUE_MASK: u16 = 0x001F;

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A packed RGB565 framebuffer cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Color565(u16);

impl Color565 {
    /// All bits clear.
    pub const BLACK: Self = Self(0x0000);
    /// All bits set; the initial drawing color.
    pub const WHITE: Self = Self(0xFFFF);

    /// Wrap a raw 16-bit value.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw 16-bit value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Pack 8-bit channels.
    ///
    /// ```
    /// use trueno_raster::color::Color565;
    ///
    /// assert_eq!(Color565::pack(0xFF, 0xFF, 0xFF), Color565::WHITE);
    /// assert_eq!(Color565::pack(0x12, 0x34, 0x56).raw(), 0x11AA);
    /// ```
    #[must_use]
    pub const fn pack(r: u8, g: u8, b: u8) -> Self {
        let red = ((r & 0xF8) as u16) << 8;
        let green = ((g & 0xFC) as u16) << 3;
        let blue = ((b >> 3) & 0x1F) as u16;
        Self(red | green | blue)
    }

    /// Decode to 8-bit channels the way the display surface paints them.
    #[must_use]
    pub const fn to_rgb(self) -> Rgb {
        Rgb::new(
            ((self.0 & RED_MASK) >> 8) as u8,
            ((self.0 & GREEN_MASK) >> 3) as u8,
            ((self.0 & BLUE_MASK) << 3) as u8,
        )
    }
}

impl From<Rgb> for Color565 {
    fn from(rgb: Rgb) -> Self {
        Self::pack(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color565> for Rgb {
    fn from(color: Color565) -> Self {
        color.to_rgb()
    }
}

impl From<u16> for Color565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color565> for u16 {
    fn from(color: Color565) -> Self {
        color.0
    }
}
