//! RGB colors and the linear shading used to derive secondary wood tones.

use std::fmt;

use serde::Serialize;

/// An opaque 8-bit-per-channel RGB color.
///
/// Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_u32(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Brighten (positive) or darken (negative) every channel by
    /// `amount * 255`, clamping each channel into `[0, 255]`.
    ///
    /// A plain linear adjustment in RGB space. `amount` is meant to lie in
    /// `[-1, 1]`, but any value yields a valid color; a NaN amount maps every
    /// channel to 0.
    #[must_use]
    pub fn shade(self, amount: f64) -> Self {
        let channel = |v: u8| (f64::from(v) + 255.0 * amount).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
