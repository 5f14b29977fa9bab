// src/display/mod.rs
//! Display device collaborator.
//!
//! - `DisplayDevice`: the two things the renderer needs from a device, its
//!   geometry and a writable view of its raster memory.
//! - `drivers::fbdev`: Linux framebuffer (`/dev/fbN`) mapped into the process.
//! - `drivers::headless`: heap-backed buffer with caller-chosen geometry.
//!
//! The renderer never opens or closes devices itself; it borrows the buffer
//! through a `PixelSurface` for the length of one render.

pub mod driver;
pub mod drivers;

pub use driver::{DeviceError, DisplayDevice, USAGE_EXIT_CODE};
pub use drivers::fbdev::FramebufferDevice;
pub use drivers::headless::HeadlessDevice;
