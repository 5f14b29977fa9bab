//! TrueType rasterizer backed by `fontdue`.

use super::{GlyphRasterizer, RasterizeError};
use crate::glyph::GlyphMask;
use fontdue::{Font, FontSettings};
use log::{debug, trace};
use std::path::{Path, PathBuf};

/// Rasterizes glyphs from a single font file loaded once at startup.
pub struct FontdueRasterizer {
    font: Font,
    source: PathBuf,
}

impl FontdueRasterizer {
    /// Reads and parses the font at `path`.
    pub fn from_path(path: &Path) -> Result<Self, RasterizeError> {
        let data = std::fs::read(path).map_err(|e| RasterizeError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rasterizer = Self::from_bytes(&data, path)?;
        debug!(
            "FontdueRasterizer: loaded {:?} ({} bytes, {} glyphs)",
            path,
            data.len(),
            rasterizer.font.glyph_count()
        );
        Ok(rasterizer)
    }

    /// Parses an in-memory font. `origin` is only used in error messages.
    pub fn from_bytes(data: &[u8], origin: &Path) -> Result<Self, RasterizeError> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| {
            RasterizeError::FontLoad {
                path: origin.to_path_buf(),
                reason: reason.to_string(),
            }
        })?;
        Ok(Self {
            font,
            source: origin.to_path_buf(),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl GlyphRasterizer for FontdueRasterizer {
    fn rasterize(&self, ch: char, size_px: u32) -> Result<GlyphMask, RasterizeError> {
        if size_px == 0 {
            return Err(RasterizeError::InvalidSize(size_px));
        }
        // Index 0 is .notdef: the font does not cover this character.
        if self.font.lookup_glyph_index(ch) == 0 {
            return Err(RasterizeError::MissingGlyph(ch));
        }

        let (metrics, coverage) = self.font.rasterize(ch, size_px as f32);
        trace!(
            "rasterize {:?} @ {}px: {}x{} xmin {} ymin {} advance {}",
            ch,
            size_px,
            metrics.width,
            metrics.height,
            metrics.xmin,
            metrics.ymin,
            metrics.advance_width
        );

        // fontdue measures ymin from the baseline to the bitmap's bottom edge;
        // the mask wants the distance from the baseline up to its top row.
        Ok(GlyphMask {
            width: metrics.width,
            height: metrics.height,
            coverage,
            bitmap_left: metrics.xmin,
            bitmap_top: metrics.ymin + metrics.height as i32,
            advance: metrics.advance_width.trunc() as i32,
        })
    }
}
