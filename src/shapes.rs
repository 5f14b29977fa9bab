// src/shapes.rs

//! Filled rectangles and thick Bresenham lines.
//!
//! Both primitives go through [`PixelSurface::set_pixel`], so they inherit its
//! clipping: any part of a shape that falls off-screen is dropped.

use crate::color::PackedPixel;
use crate::surface::PixelSurface;
use log::trace;

/// A point in surface coordinates. May lie off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
///
/// Stored half-open (`left..right`, `top..bottom`) so that zero-area
/// rectangles are representable. [`Rect::new`] takes two inclusive corners in
/// any order; [`Rect::from_size`] takes an origin and an extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Rectangle covering both corners inclusively, whatever their order.
    pub fn new(a: Position, b: Position) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x).saturating_add(1),
            bottom: a.y.max(b.y).saturating_add(1),
        }
    }

    /// Rectangle of `width` x `height` pixels whose top-left pixel is `origin`.
    /// A zero extent gives an empty rectangle.
    pub fn from_size(origin: Position, width: u32, height: u32) -> Self {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x.saturating_add(width),
            bottom: origin.y.saturating_add(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn width(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.right.abs_diff(self.left)
        }
    }

    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.bottom.abs_diff(self.top)
        }
    }

    /// Top-left pixel.
    pub fn start(&self) -> Position {
        Position::new(self.left, self.top)
    }

    /// Bottom-right pixel (inclusive), or `None` for an empty rectangle.
    pub fn end(&self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(Position::new(self.right - 1, self.bottom - 1))
        }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

/// Fills `rect` with `pixel`, row-major from the start corner.
///
/// Empty rectangles draw nothing. The iteration range is clamped to the
/// surface first; every pixel outside it would have been clipped anyway.
pub fn fill_rect(surface: &mut PixelSurface<'_>, rect: Rect, pixel: PackedPixel) {
    if rect.is_empty() {
        return;
    }
    trace!(
        "fill_rect: {:?}..={:?} with {:#x}",
        rect.start(),
        rect.end(),
        pixel.value()
    );
    let left = rect.left.max(0);
    let top = rect.top.max(0);
    let right = rect.right.min(surface.width().min(i32::MAX as u32) as i32);
    let bottom = rect.bottom.min(surface.height().min(i32::MAX as u32) as i32);
    for y in top..bottom {
        for x in left..right {
            surface.set_pixel(x, y, pixel);
        }
    }
}

/// Draws a line from `start` to `end` (both inclusive).
///
/// Walks the integer Bresenham path and stamps a square brush at every step.
/// The brush covers offsets `-width/2..=width/2` on both axes, so `width <= 1`
/// paints a single pixel and even widths round up to the next odd size.
/// Both axes may advance in the same step, which keeps diagonals gap-free.
///
/// The walk runs in `i64`, so endpoints anywhere in the `i32` plane are
/// valid. It stops as soon as the brush has left the surface along an axis
/// it is moving away on.
pub fn draw_line(
    surface: &mut PixelSurface<'_>,
    start: Position,
    end: Position,
    pixel: PackedPixel,
    width: u32,
) {
    trace!(
        "draw_line: {:?} -> {:?}, width {}, {:#x}",
        start,
        end,
        width,
        pixel.value()
    );
    let half = i64::from(width / 2);
    let surface_w = i64::from(surface.width());
    let surface_h = i64::from(surface.height());

    let (end_x, end_y) = (i64::from(end.x), i64::from(end.y));
    let (mut x, mut y) = (i64::from(start.x), i64::from(start.y));
    let dx = (end_x - x).abs();
    let dy = -(end_y - y).abs();
    let sx: i64 = if x < end_x { 1 } else { -1 };
    let sy: i64 = if y < end_y { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp(surface, x, y, half, pixel);

        if x == end_x && y == end_y {
            break;
        }
        let gone_x = (sx > 0 && x - half >= surface_w) || (sx < 0 && x + half < 0);
        let gone_y = (sy > 0 && y - half >= surface_h) || (sy < 0 && y + half < 0);
        if gone_x || gone_y {
            trace!("draw_line: left the surface at ({}, {})", x, y);
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Square brush of radius `half` centered on `(x, y)`, clipped to the surface.
fn stamp(surface: &mut PixelSurface<'_>, x: i64, y: i64, half: i64, pixel: PackedPixel) {
    let left = (x - half).max(0);
    let right = (x + half).min(i64::from(surface.width()) - 1);
    let top = (y - half).max(0);
    let bottom = (y + half).min(i64::from(surface.height()) - 1);
    for py in top..=bottom {
        for px in left..=right {
            // Clamped to the surface above, which is at most i32::MAX wide.
            if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
                surface.set_pixel(px, py, pixel);
            }
        }
    }
}
