//! Headless block-glyph rasterizer.
//!
//! Every printable character becomes a `size/2` x `size` block sitting on the
//! baseline. Column 0 is transparent and row 0 has the faintest non-zero
//! coverage, which makes stencil behaviour easy to check.

use super::{GlyphRasterizer, RasterizeError};
use crate::glyph::GlyphMask;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct HeadlessRasterizer {
    missing: HashSet<char>,
}

impl HeadlessRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `rasterize` fail with `MissingGlyph` for each of `chars`.
    pub fn without_glyphs(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            missing: chars.into_iter().collect(),
        }
    }

    /// Advance used for a glyph of `size_px`.
    pub fn advance_for(size_px: u32) -> i32 {
        (size_px / 2 + 1) as i32
    }
}

impl GlyphRasterizer for HeadlessRasterizer {
    fn rasterize(&self, ch: char, size_px: u32) -> Result<GlyphMask, RasterizeError> {
        if size_px == 0 {
            return Err(RasterizeError::InvalidSize(size_px));
        }
        if self.missing.contains(&ch) {
            return Err(RasterizeError::MissingGlyph(ch));
        }

        let advance = Self::advance_for(size_px);
        if ch.is_whitespace() {
            return Ok(GlyphMask {
                width: 0,
                height: 0,
                coverage: Vec::new(),
                bitmap_left: 0,
                bitmap_top: 0,
                advance,
            });
        }

        let width = (size_px / 2).max(1) as usize;
        let height = size_px as usize;
        let mut coverage = vec![255u8; width * height];
        for (idx, cell) in coverage.iter_mut().enumerate() {
            let (i, j) = (idx % width, idx / width);
            if i == 0 {
                *cell = 0;
            } else if j == 0 {
                *cell = 1;
            }
        }

        Ok(GlyphMask {
            width,
            height,
            coverage,
            bitmap_left: 0,
            bitmap_top: height as i32,
            advance,
        })
    }
}
