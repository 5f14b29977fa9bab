// src/surface.rs

//! Bounds-checked pixel addressing over a borrowed raster buffer.
//!
//! A [`PixelSurface`] is the explicit render context: it pairs the device
//! [`Geometry`] with a mutable borrow of the raster memory for the duration of
//! one render session. It owns nothing, so the same code drives a mapped
//! framebuffer or a plain `Vec<u8>` in tests.
//!
//! Coordinates are signed. Shapes and glyphs are allowed to hang off the edges
//! of the screen during composition; anything outside `[0, width) x [0, height)`
//! is clipped silently.

use crate::color::{Color, PackedPixel, PixelDepth};
use crate::error::RenderError;
use log::trace;

/// Addressing parameters of a raster surface, as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    /// Visible width in pixels.
    pub width: u32,
    /// Visible height in pixels.
    pub height: u32,
    pub bits_per_pixel: u32,
    /// Bytes between the starts of two consecutive rows.
    pub stride_bytes: u32,
    /// Horizontal pan offset of the visible area inside the buffer.
    pub x_offset: u32,
    /// Vertical pan offset of the visible area inside the buffer.
    pub y_offset: u32,
}

impl Geometry {
    /// Tightly packed geometry with no pan offset.
    pub fn packed(width: u32, height: u32, bits_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel,
            stride_bytes: width.saturating_mul(bits_per_pixel / 8),
            x_offset: 0,
            y_offset: 0,
        }
    }

    /// Smallest buffer length able to hold every visible pixel.
    ///
    /// Saturates at `usize::MAX` for geometries no buffer could hold, which
    /// [`PixelSurface::new`] then rejects as too small.
    pub fn required_len(&self) -> usize {
        if self.width == 0 || self.height == 0 {
            return 0;
        }
        let bytes_per_pixel = u64::from(self.bits_per_pixel / 8);
        let last_row = u64::from(self.y_offset) + u64::from(self.height) - 1;
        let row_end = (u64::from(self.x_offset) + u64::from(self.width)) * bytes_per_pixel;
        last_row
            .checked_mul(u64::from(self.stride_bytes))
            .and_then(|start| start.checked_add(row_end))
            .and_then(|len| usize::try_from(len).ok())
            .unwrap_or(usize::MAX)
    }
}

/// Mutable view over a raster buffer with fixed geometry.
pub struct PixelSurface<'a> {
    buffer: &'a mut [u8],
    geometry: Geometry,
    depth: PixelDepth,
}

impl<'a> PixelSurface<'a> {
    /// Wraps `buffer` for drawing.
    ///
    /// The depth is validated here, once, so no per-pixel write ever has to
    /// deal with an unknown format.
    ///
    /// # Errors
    /// * [`RenderError::UnsupportedDepth`] if the geometry is neither 16 nor 32 bpp.
    /// * [`RenderError::BufferTooSmall`] if `buffer` cannot hold the visible area.
    pub fn new(buffer: &'a mut [u8], geometry: Geometry) -> Result<Self, RenderError> {
        let depth = PixelDepth::from_bits(geometry.bits_per_pixel)?;
        let required = geometry.required_len();
        if buffer.len() < required {
            return Err(RenderError::BufferTooSmall {
                required,
                actual: buffer.len(),
            });
        }
        trace!(
            "PixelSurface: {}x{} {:?}, stride {} bytes, pan ({}, {})",
            geometry.width,
            geometry.height,
            depth,
            geometry.stride_bytes,
            geometry.x_offset,
            geometry.y_offset
        );
        Ok(Self {
            buffer,
            geometry,
            depth,
        })
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn depth(&self) -> PixelDepth {
        self.depth
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    /// Encodes `color` in this surface's native layout.
    pub fn pack(&self, color: Color) -> PackedPixel {
        self.depth.pack(color)
    }

    /// Byte offset of `(x, y)`, or `None` when the point is off-screen.
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.geometry.width || y as u32 >= self.geometry.height {
            return None;
        }
        let column = x as usize + self.geometry.x_offset as usize;
        let row = y as usize + self.geometry.y_offset as usize;
        Some(column * self.depth.bytes_per_pixel() + row * self.geometry.stride_bytes as usize)
    }

    /// Writes one pixel. Off-screen coordinates are a no-op.
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: PackedPixel) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        match self.depth {
            PixelDepth::Rgb565 => {
                self.buffer[offset..offset + 2].copy_from_slice(&(pixel.0 as u16).to_le_bytes());
            }
            PixelDepth::Argb8888 => {
                self.buffer[offset..offset + 4].copy_from_slice(&pixel.0.to_le_bytes());
            }
        }
    }

    /// Reads one pixel back, or `None` when the point is off-screen.
    pub fn pixel(&self, x: i32, y: i32) -> Option<PackedPixel> {
        let offset = self.offset(x, y)?;
        let value = match self.depth {
            PixelDepth::Rgb565 => {
                u16::from_le_bytes([self.buffer[offset], self.buffer[offset + 1]]) as u32
            }
            PixelDepth::Argb8888 => u32::from_le_bytes([
                self.buffer[offset],
                self.buffer[offset + 1],
                self.buffer[offset + 2],
                self.buffer[offset + 3],
            ]),
        };
        Some(PackedPixel(value))
    }

    /// Reads one pixel back as a logical color.
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.pixel(x, y).map(|p| self.depth.unpack(p))
    }

    /// Paints every visible pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let pixel = self.pack(color);
        for y in 0..self.geometry.height as i32 {
            for x in 0..self.geometry.width as i32 {
                self.set_pixel(x, y, pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests;
