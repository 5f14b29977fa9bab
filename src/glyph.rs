// src/glyph.rs

//! Glyph masks and the stencil compositor that puts them on a surface.
//!
//! A [`GlyphMask`] is what the font collaborator hands back for one character.
//! The compositor treats coverage as a binary stencil: every non-zero cell is
//! painted with the full foreground color and zero cells are left alone. There
//! is no blending with whatever is already on the surface.

use crate::color::{Color, PackedPixel};
use crate::error::RenderError;
use crate::rasterizer::GlyphRasterizer;
use crate::shapes::Position;
use crate::surface::PixelSurface;
use log::{trace, warn};

/// Coverage bitmap for a single rasterized character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphMask {
    pub width: usize,
    pub height: usize,
    /// `width * height` intensities, row-major, 0 = empty.
    pub coverage: Vec<u8>,
    /// Horizontal distance from the pen to the mask's left column.
    pub bitmap_left: i32,
    /// Distance from the baseline up to the mask's top row.
    pub bitmap_top: i32,
    /// Pen advance to the next character, whole pixels.
    pub advance: i32,
}

impl GlyphMask {
    /// Coverage at column `i`, row `j`; out-of-range cells read as empty.
    pub fn coverage_at(&self, i: usize, j: usize) -> u8 {
        if i >= self.width || j >= self.height {
            return 0;
        }
        self.coverage.get(j * self.width + i).copied().unwrap_or(0)
    }
}

/// Outcome of laying out one string.
#[derive(Debug, Default)]
pub struct TextRun {
    /// Characters whose mask was composited.
    pub glyphs_drawn: usize,
    /// Per-character failures; those characters were skipped.
    pub skipped: Vec<RenderError>,
    /// Pen position after the last drawn character.
    pub pen_end: Position,
}

/// Stamps `mask` onto `surface` with the pen on the baseline at `pen`.
///
/// Cell `(i, j)` lands at `(pen.x + bitmap_left + i, pen.y - bitmap_top + j)`.
/// Cells that fall off the surface are clipped.
pub fn composite_mask(
    surface: &mut PixelSurface<'_>,
    mask: &GlyphMask,
    pen: Position,
    pixel: PackedPixel,
) {
    let origin_x = pen.x.saturating_add(mask.bitmap_left);
    let origin_y = pen.y.saturating_sub(mask.bitmap_top);
    for j in 0..mask.height {
        for i in 0..mask.width {
            if mask.coverage_at(i, j) != 0 {
                surface.set_pixel(
                    origin_x.saturating_add(i as i32),
                    origin_y.saturating_add(j as i32),
                    pixel,
                );
            }
        }
    }
}

/// Draws `text` starting with the pen at `origin` (baseline-left).
///
/// Characters are requested from `rasterizer` one at a time. A character the
/// rasterizer cannot produce is logged, recorded in [`TextRun::skipped`] and
/// skipped without advancing the pen; the rest of the string still renders.
pub fn draw_text<R: GlyphRasterizer + ?Sized>(
    surface: &mut PixelSurface<'_>,
    rasterizer: &R,
    text: &str,
    origin: Position,
    size_px: u32,
    color: Color,
) -> TextRun {
    let pixel = surface.pack(color);
    let mut run = TextRun {
        pen_end: origin,
        ..TextRun::default()
    };
    let mut pen = origin;

    for ch in text.chars() {
        let mask = match rasterizer.rasterize(ch, size_px) {
            Ok(mask) => mask,
            Err(source) => {
                warn!("Skipping character {:?}: {}", ch, source);
                run.skipped.push(RenderError::GlyphRasterization {
                    character: ch,
                    source,
                });
                continue;
            }
        };
        trace!(
            "draw_text: {:?} at {:?}, {}x{}, advance {}",
            ch,
            pen,
            mask.width,
            mask.height,
            mask.advance
        );
        composite_mask(surface, &mask, pen, pixel);
        pen.x = pen.x.saturating_add(mask.advance);
        run.glyphs_drawn += 1;
    }

    run.pen_end = pen;
    run
}
