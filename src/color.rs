// src/color.rs

//! Logical colors and their device-native packed encodings.
//!
//! This is the single place in the crate that branches on bit depth. Everything
//! downstream (surface writes, shapes, text) works on an already packed
//! [`PackedPixel`] and never looks at the depth again.

use crate::error::RenderError;
use serde::{Deserialize, Serialize};

/// A logical RGB color with an optional alpha channel.
///
/// Alpha is carried for completeness but the packers force it opaque; none of
/// the supported framebuffer formats are blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque_alpha")]
    pub a: u8,
}

fn opaque_alpha() -> u8 {
    0xFF
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

/// Pixel layouts the surface knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelDepth {
    /// 16 bits per pixel, 5-6-5 red/green/blue.
    Rgb565,
    /// 32 bits per pixel, alpha in the top byte.
    Argb8888,
}

impl PixelDepth {
    /// Resolves a raw bits-per-pixel value reported by a device.
    ///
    /// # Errors
    /// Returns [`RenderError::UnsupportedDepth`] for anything other than 16 or 32.
    pub fn from_bits(bits_per_pixel: u32) -> Result<Self, RenderError> {
        match bits_per_pixel {
            16 => Ok(PixelDepth::Rgb565),
            32 => Ok(PixelDepth::Argb8888),
            other => Err(RenderError::UnsupportedDepth(other)),
        }
    }

    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            PixelDepth::Rgb565 => 16,
            PixelDepth::Argb8888 => 32,
        }
    }

    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelDepth::Rgb565 => 2,
            PixelDepth::Argb8888 => 4,
        }
    }

    /// Encodes `color` for this depth.
    ///
    /// 32-bit output always has an opaque alpha byte. 16-bit output truncates
    /// each channel to its top bits with no rounding.
    pub const fn pack(self, color: Color) -> PackedPixel {
        let (r, g, b) = (color.r as u32, color.g as u32, color.b as u32);
        match self {
            PixelDepth::Argb8888 => PackedPixel((0xFF << 24) | (r << 16) | (g << 8) | b),
            PixelDepth::Rgb565 => PackedPixel(((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3)),
        }
    }

    /// Inverse of [`PixelDepth::pack`].
    ///
    /// For RGB565 the dropped low bits come back as zero, so
    /// `unpack(pack(c))` yields `c` with each channel masked to its stored bits.
    pub const fn unpack(self, pixel: PackedPixel) -> Color {
        let v = pixel.0;
        match self {
            PixelDepth::Argb8888 => Color::rgba(
                ((v >> 16) & 0xFF) as u8,
                ((v >> 8) & 0xFF) as u8,
                (v & 0xFF) as u8,
                ((v >> 24) & 0xFF) as u8,
            ),
            PixelDepth::Rgb565 => Color::rgb(
                (((v >> 11) & 0x1F) << 3) as u8,
                (((v >> 5) & 0x3F) << 2) as u8,
                ((v & 0x1F) << 3) as u8,
            ),
        }
    }
}

/// A color already encoded in a device-native layout.
///
/// The value is only meaningful together with the [`PixelDepth`] that produced
/// it; surfaces write the low 16 or all 32 bits depending on their own depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedPixel(pub u32);

impl PackedPixel {
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Packs `color` for a raw bits-per-pixel value.
///
/// Convenience wrapper over [`PixelDepth::from_bits`] and [`PixelDepth::pack`].
pub fn pack(color: Color, bits_per_pixel: u32) -> Result<PackedPixel, RenderError> {
    Ok(PixelDepth::from_bits(bits_per_pixel)?.pack(color))
}
