//! fb-progress library crate.
//!
//! Draws a boot progress bar and a short logo label straight into a raster
//! surface (typically a mapped Linux framebuffer), with no windowing system
//! involved. The binary in `main.rs` is a thin CLI over this API.

pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod glyph;
pub mod rasterizer;
pub mod renderer;
pub mod shapes;
pub mod surface;

pub use color::{Color, PackedPixel, PixelDepth};
pub use error::RenderError;
pub use renderer::{Percentage, Renderer};
pub use surface::{Geometry, PixelSurface};
