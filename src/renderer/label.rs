// src/renderer/label.rs

//! Fixed-position label (the logo) above the progress bar.

use crate::color::Color;
use crate::config::{FontConfig, LogoConfig};
use crate::glyph::{draw_text, TextRun};
use crate::rasterizer::GlyphRasterizer;
use crate::shapes::{Position, Rect};
use crate::surface::{Geometry, PixelSurface};
use log::debug;

/// Pen origin (baseline-left) and pixel size for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPlacement {
    pub origin: Position,
    pub size_px: u32,
}

/// Places the logo a quarter of the way into the bar, with its baseline half
/// a bar-height above the bar. The point size scales with screen width.
pub fn logo_placement(
    bar: Rect,
    geometry: &Geometry,
    logo: &LogoConfig,
    font: &FontConfig,
) -> LabelPlacement {
    let start = bar.start();
    let origin = Position::new(
        start.x + (bar.width() / 4) as i32,
        start.y - (bar.height() / 2) as i32,
    );
    let points = geometry.width / logo.size_divisor.max(1);
    LabelPlacement {
        origin,
        size_px: font.points_to_pixels(points),
    }
}

/// Draws `text` once at `placement`. No wrapping, no measuring.
pub fn draw_label<R: GlyphRasterizer + ?Sized>(
    surface: &mut PixelSurface<'_>,
    rasterizer: &R,
    text: &str,
    placement: LabelPlacement,
    color: Color,
) -> TextRun {
    debug!(
        "Label {:?} at {:?}, {} px",
        text, placement.origin, placement.size_px
    );
    draw_text(
        surface,
        rasterizer,
        text,
        placement.origin,
        placement.size_px,
        color,
    )
}
