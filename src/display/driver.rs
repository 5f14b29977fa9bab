// src/display/driver.rs
//! `DisplayDevice` trait and the errors raised while acquiring a device.
//!
//! ## Lifecycle
//! 1. Driver-specific constructor acquires the device and discovers geometry.
//! 2. `surface()` lends the raster memory to a `PixelSurface` for drawing.
//! 3. `Drop` releases the mapping (no explicit close method).

use crate::error::RenderError;
use crate::surface::{Geometry, PixelSurface};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a malformed command line (`EX_USAGE`).
///
/// Kept clear of the device codes below:
///
/// | code | meaning |
/// |------|---------|
/// | 1 | device could not be opened |
/// | 2 | fixed screen information unreadable |
/// | 3 | variable screen information unreadable |
/// | 4 | raster memory could not be mapped |
/// | 5 | geometry or depth cannot be drawn on |
/// | 64 | bad command-line arguments |
pub const USAGE_EXIT_CODE: i32 = 64;

/// Failures while acquiring a display device.
///
/// Each variant maps to a distinct process exit code so boot scripts can tell
/// which step failed. See [`USAGE_EXIT_CODE`] for the full table.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("cannot open framebuffer device {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading fixed information")]
    FixedInfo(#[source] io::Error),

    #[error("error reading variable information")]
    VariableInfo(#[source] io::Error),

    #[error("failed to map framebuffer device to memory")]
    Map(#[source] io::Error),

    #[error("unusable framebuffer geometry: {0}")]
    UnsupportedGeometry(String),
}

impl DeviceError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeviceError::Open { .. } => 1,
            DeviceError::FixedInfo(_) => 2,
            DeviceError::VariableInfo(_) => 3,
            DeviceError::Map(_) => 4,
            DeviceError::UnsupportedGeometry(_) => 5,
        }
    }
}

/// A raster device the renderer can draw into.
pub trait DisplayDevice {
    /// Addressing parameters of the visible area.
    fn geometry(&self) -> Geometry;

    /// The whole writable raster memory.
    fn buffer_mut(&mut self) -> &mut [u8];

    /// Lends the raster memory to a surface for one render session.
    ///
    /// # Errors
    /// Propagates [`RenderError::UnsupportedDepth`] and
    /// [`RenderError::BufferTooSmall`] from [`PixelSurface::new`].
    fn surface(&mut self) -> Result<PixelSurface<'_>, RenderError> {
        let geometry = self.geometry();
        PixelSurface::new(self.buffer_mut(), geometry)
    }
}
