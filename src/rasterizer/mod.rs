// src/rasterizer/mod.rs

//! Font rasterization collaborator.
//!
//! The compositor only needs one primitive from a font backend: turn a
//! character at a pixel size into a coverage mask plus placement metrics. The
//! `GlyphRasterizer` trait is that seam.
//!
//! - `fontdue_driver`: loads a TrueType/OpenType file from disk (used by the CLI).
//! - `headless_font_driver`: deterministic block glyphs with no font file,
//!   for tests and for callers without fonts installed.

pub mod fontdue_driver;
pub mod headless_font_driver;

pub use fontdue_driver::FontdueRasterizer;
pub use headless_font_driver::HeadlessRasterizer;

use crate::glyph::GlyphMask;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterizeError {
    #[error("Could not load font {path:?}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    #[error("Font has no glyph for {0:?}")]
    MissingGlyph(char),

    #[error("Invalid font size: {0} px")]
    InvalidSize(u32),
}

/// Produces per-character coverage masks.
pub trait GlyphRasterizer {
    /// Rasterize `ch` at `size_px` pixels per em.
    ///
    /// # Returns
    /// A [`GlyphMask`] with one coverage byte per pixel, row-major, plus the
    /// bearing and advance needed to place it on a baseline.
    fn rasterize(&self, ch: char, size_px: u32) -> Result<GlyphMask, RasterizeError>;
}

impl<R: GlyphRasterizer + ?Sized> GlyphRasterizer for &R {
    fn rasterize(&self, ch: char, size_px: u32) -> Result<GlyphMask, RasterizeError> {
        (**self).rasterize(ch, size_px)
    }
}
