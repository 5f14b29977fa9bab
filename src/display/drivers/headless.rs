//! Headless in-memory display device.

use crate::display::driver::DisplayDevice;
use crate::surface::Geometry;
use log::info;

pub struct HeadlessDevice {
    geometry: Geometry,
    framebuffer: Box<[u8]>,
}

impl HeadlessDevice {
    /// Allocates a zeroed buffer just large enough for `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        info!(
            "HeadlessDevice::new() {}x{} @ {}bpp, stride {}",
            geometry.width, geometry.height, geometry.bits_per_pixel, geometry.stride_bytes
        );
        let framebuffer = vec![0u8; geometry.required_len()].into_boxed_slice();
        Self {
            geometry,
            framebuffer,
        }
    }

    /// Read-only view of the raster memory.
    pub fn buffer(&self) -> &[u8] {
        &self.framebuffer
    }
}

impl DisplayDevice for HeadlessDevice {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.framebuffer
    }
}
