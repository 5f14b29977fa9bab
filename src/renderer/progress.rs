// src/renderer/progress.rs

//! Progress bar layout and composition.

use crate::config::ProgressConfig;
use crate::error::RenderError;
use crate::shapes::{fill_rect, Position, Rect};
use crate::surface::{Geometry, PixelSurface};
use log::{debug, trace};

/// A validated progress value in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    pub const COMPLETE: Percentage = Percentage(100);

    /// # Errors
    /// [`RenderError::InvalidProgress`] for values outside `0..=100`. Values are
    /// never clamped.
    pub fn new(value: i64) -> Result<Self, RenderError> {
        if (0..=100).contains(&value) {
            Ok(Percentage(value as u8))
        } else {
            Err(RenderError::InvalidProgress(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<i64> for Percentage {
    type Error = RenderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Percentage::new(value)
    }
}

/// Where the bar and its filled part go on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLayout {
    /// Full track.
    pub bar: Rect,
    /// Filled part, anchored at the bar's left edge. Empty at 0 %.
    pub filled: Rect,
    pub percentage: Percentage,
}

/// Bar rectangle: a fixed fraction of the screen, centered.
pub fn bar_rect(geometry: &Geometry, config: &ProgressConfig) -> Rect {
    let width = (geometry.width as u64 * config.width_percent.min(100) as u64 / 100) as u32;
    let height = (geometry.height as u64 * config.height_percent.min(100) as u64 / 100) as u32;
    let x = (geometry.width - width) / 2;
    let y = (geometry.height - height) / 2;
    Rect::from_size(Position::new(x as i32, y as i32), width, height)
}

/// `floor(bar_width * percentage / 100)`.
///
/// Percentages that truncate to the same width are indistinguishable on
/// screen.
pub fn filled_width(bar_width: u32, percentage: Percentage) -> u32 {
    (bar_width as u64 * percentage.value() as u64 / 100) as u32
}

/// Computes the layout for `percentage` on a surface of `geometry`.
pub fn layout(geometry: &Geometry, config: &ProgressConfig, percentage: Percentage) -> ProgressLayout {
    let bar = bar_rect(geometry, config);
    let filled = Rect::from_size(bar.start(), filled_width(bar.width(), percentage), bar.height());
    ProgressLayout {
        bar,
        filled,
        percentage,
    }
}

/// Draws the track, then the filled part on top of it.
///
/// The fill uses `config.color` below 100 % and `config.complete_color` at
/// 100 %.
pub fn draw_progress(
    surface: &mut PixelSurface<'_>,
    percentage: Percentage,
    config: &ProgressConfig,
) -> ProgressLayout {
    let geometry = surface.geometry();
    let layout = layout(&geometry, config, percentage);
    debug!(
        "Progress {}%: bar {:?} ({}x{}), filled width {}",
        percentage.value(),
        layout.bar.start(),
        layout.bar.width(),
        layout.bar.height(),
        layout.filled.width()
    );

    let background = surface.pack(config.background_color);
    fill_rect(surface, layout.bar, background);

    let fill_color = if percentage.is_complete() {
        config.complete_color
    } else {
        config.color
    };
    trace!("Progress fill color {:?}", fill_color);
    let fill = surface.pack(fill_color);
    fill_rect(surface, layout.filled, fill);

    layout
}
