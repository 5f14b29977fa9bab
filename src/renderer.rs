// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` turns a progress value into drawing calls on a
//! `PixelSurface`: an optional logo label and the progress bar beneath it. It
//! is stateless beyond the configuration it was built with, so one call draws
//! one complete frame and nothing carries over between calls.
//!
//! Failures are reported per call. An invalid percentage is rejected before
//! anything is drawn; a glyph the font cannot produce is skipped and the rest
//! of the frame still renders.

pub mod label;
pub mod progress;

pub use label::{draw_label, logo_placement, LabelPlacement};
pub use progress::{bar_rect, draw_progress, filled_width, layout, Percentage, ProgressLayout};

use crate::config::{Config, FontConfig, LogoConfig, ProgressConfig};
use crate::error::RenderError;
use crate::glyph::TextRun;
use crate::rasterizer::GlyphRasterizer;
use crate::surface::PixelSurface;
use log::{debug, info};

/// What one boot-screen render produced.
#[derive(Debug)]
pub struct BootScreenReport {
    pub progress: ProgressLayout,
    /// `None` when the logo is disabled or no rasterizer was supplied.
    pub logo: Option<TextRun>,
}

/// Draws the boot progress screen.
#[derive(Debug, Clone)]
pub struct Renderer {
    progress: ProgressConfig,
    logo: LogoConfig,
    font: FontConfig,
}

impl Renderer {
    /// Creates a renderer from the relevant configuration sections.
    pub fn new(config: &Config) -> Self {
        Self {
            progress: config.progress.clone(),
            logo: config.logo.clone(),
            font: config.font.clone(),
        }
    }

    /// Draws only the progress bar for a raw `value`.
    ///
    /// # Errors
    /// [`RenderError::InvalidProgress`] if `value` is outside `0..=100`; the
    /// surface is left untouched in that case.
    pub fn draw_progress(
        &self,
        surface: &mut PixelSurface<'_>,
        value: i64,
    ) -> Result<ProgressLayout, RenderError> {
        let percentage = Percentage::new(value)?;
        Ok(draw_progress(surface, percentage, &self.progress))
    }

    /// Draws the configured logo text relative to the bar for this surface.
    pub fn draw_logo<R: GlyphRasterizer + ?Sized>(
        &self,
        surface: &mut PixelSurface<'_>,
        rasterizer: &R,
    ) -> TextRun {
        let geometry = surface.geometry();
        let bar = bar_rect(&geometry, &self.progress);
        let placement = logo_placement(bar, &geometry, &self.logo, &self.font);
        draw_label(surface, rasterizer, &self.logo.text, placement, self.logo.color)
    }

    /// Renders the full boot screen: logo (when enabled and a rasterizer is
    /// available), then the progress bar.
    ///
    /// The percentage is validated before any drawing happens.
    ///
    /// # Errors
    /// [`RenderError::InvalidProgress`] for values outside `0..=100`.
    pub fn render_boot_screen(
        &self,
        surface: &mut PixelSurface<'_>,
        rasterizer: Option<&dyn GlyphRasterizer>,
        value: i64,
    ) -> Result<BootScreenReport, RenderError> {
        let percentage = Percentage::new(value)?;
        info!("Rendering boot screen at {}%", percentage.value());

        let logo = match rasterizer {
            Some(rasterizer) if self.logo.enabled => Some(self.draw_logo(surface, rasterizer)),
            _ => {
                debug!("Logo skipped (enabled: {})", self.logo.enabled);
                None
            }
        };

        let progress = draw_progress(surface, percentage, &self.progress);
        Ok(BootScreenReport { progress, logo })
    }
}
