// src/error.rs

//! Error kinds raised by the rendering core.
//!
//! Device and font-loading failures live next to their collaborators
//! (`display::DeviceError`, `rasterizer::RasterizeError`); this module only
//! covers what the drawing code itself can reject.

use crate::rasterizer::RasterizeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The surface reports a color depth other than 16 or 32 bits.
    #[error("Unsupported color format: {0} bits per pixel")]
    UnsupportedDepth(u32),

    /// A progress value outside `0..=100` was requested.
    #[error("Progress value must be between 0 and 100, got {0}")]
    InvalidProgress(i64),

    /// The font collaborator could not produce a mask for one character.
    #[error("Failed to rasterize glyph {character:?}")]
    GlyphRasterization {
        character: char,
        #[source]
        source: RasterizeError,
    },

    /// The raster buffer cannot hold the visible area described by the geometry.
    #[error("Raster buffer too small: need {required} bytes, have {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}
