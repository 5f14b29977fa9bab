//! Linux framebuffer (`/dev/fbN`) display device.
//!
//! Opens the device node, reads its fixed and variable screen info with the
//! `FBIOGET_*` ioctls and maps the raster memory shared and writable. The
//! mapping and the file descriptor are released on `Drop`.

use crate::display::driver::{DeviceError, DisplayDevice};
use crate::surface::Geometry;
use log::{debug, info, warn};
use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::ptr::{self, NonNull};

const FBIOGET_VSCREENINFO: u32 = 0x4600;
const FBIOGET_FSCREENINFO: u32 = 0x4602;

/// Mirror of the kernel's `struct fb_bitfield`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbBitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// Mirror of the kernel's `struct fb_var_screeninfo`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbVarScreeninfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: FbBitfield,
    pub green: FbBitfield,
    pub blue: FbBitfield,
    pub transp: FbBitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

/// Mirror of the kernel's `struct fb_fix_screeninfo`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbFixScreeninfo {
    pub id: [u8; 16],
    pub smem_start: libc::c_ulong,
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: libc::c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    pub reserved: [u16; 2],
}

impl FbFixScreeninfo {
    /// Driver identification string, e.g. `"simple"` or `"BCM2708 FB"`.
    pub fn id(&self) -> String {
        let end = self.id.iter().position(|&b| b == 0).unwrap_or(self.id.len());
        String::from_utf8_lossy(&self.id[..end]).into_owned()
    }
}

nix::ioctl_read_bad!(fbioget_vscreeninfo, FBIOGET_VSCREENINFO, FbVarScreeninfo);
nix::ioctl_read_bad!(fbioget_fscreeninfo, FBIOGET_FSCREENINFO, FbFixScreeninfo);

/// Builds the renderer's geometry from the kernel's screen info.
pub fn geometry_from_screeninfo(var: &FbVarScreeninfo, fix: &FbFixScreeninfo) -> Geometry {
    Geometry {
        width: var.xres,
        height: var.yres,
        bits_per_pixel: var.bits_per_pixel,
        stride_bytes: fix.line_length,
        x_offset: var.xoffset,
        y_offset: var.yoffset,
    }
}

/// Bytes to map: the whole video memory when the driver reports it,
/// otherwise every virtual row.
pub fn mapping_len(var: &FbVarScreeninfo, fix: &FbFixScreeninfo) -> usize {
    if fix.smem_len != 0 {
        fix.smem_len as usize
    } else {
        fix.line_length as usize * var.yres_virtual.max(var.yres) as usize
    }
}

/// A memory-mapped Linux framebuffer.
#[derive(Debug)]
pub struct FramebufferDevice {
    // Keeps the descriptor alive for as long as the mapping exists.
    _file: File,
    map: NonNull<u8>,
    map_len: usize,
    geometry: Geometry,
    fix: FbFixScreeninfo,
    var: FbVarScreeninfo,
}

impl FramebufferDevice {
    /// Opens and maps the framebuffer at `path`.
    ///
    /// # Errors
    /// One [`DeviceError`] variant per step: open, fixed info, variable info,
    /// mmap, plus a geometry check against the mapped length.
    pub fn open(path: &Path) -> Result<Self, DeviceError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| DeviceError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let fd = file.as_raw_fd();
        debug!("FramebufferDevice: opened {:?} as fd {}", path, fd);

        let mut fix = FbFixScreeninfo::default();
        // SAFETY: `fix` is a `repr(C)` mirror of the struct this ioctl fills.
        unsafe { fbioget_fscreeninfo(fd, &mut fix) }
            .map_err(|errno| DeviceError::FixedInfo(io::Error::from(errno)))?;

        let mut var = FbVarScreeninfo::default();
        // SAFETY: as above, for `fb_var_screeninfo`.
        unsafe { fbioget_vscreeninfo(fd, &mut var) }
            .map_err(|errno| DeviceError::VariableInfo(io::Error::from(errno)))?;

        let geometry = geometry_from_screeninfo(&var, &fix);
        let map_len = mapping_len(&var, &fix);
        if map_len == 0 || geometry.required_len() > map_len {
            return Err(DeviceError::UnsupportedGeometry(format!(
                "{}x{} @ {}bpp with stride {} and pan ({}, {}) does not fit {} bytes of video memory",
                geometry.width,
                geometry.height,
                geometry.bits_per_pixel,
                geometry.stride_bytes,
                geometry.x_offset,
                geometry.y_offset,
                map_len
            )));
        }

        // SAFETY: fresh shared mapping of a device fd we hold open; the result
        // is checked against MAP_FAILED before use.
        let addr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                map_len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                fd,
                0,
            )
        };
        if addr == libc::MAP_FAILED {
            return Err(DeviceError::Map(io::Error::last_os_error()));
        }
        let map = NonNull::new(addr as *mut u8).ok_or_else(|| {
            DeviceError::Map(io::Error::new(io::ErrorKind::Other, "mmap returned null"))
        })?;

        info!(
            "Framebuffer {:?} ({}): {}x{}, {}bpp, stride {} bytes, pan ({}, {}), {} bytes mapped",
            path,
            fix.id(),
            geometry.width,
            geometry.height,
            geometry.bits_per_pixel,
            geometry.stride_bytes,
            geometry.x_offset,
            geometry.y_offset,
            map_len
        );

        Ok(Self {
            _file: file,
            map,
            map_len,
            geometry,
            fix,
            var,
        })
    }

    pub fn fixed_info(&self) -> &FbFixScreeninfo {
        &self.fix
    }

    pub fn variable_info(&self) -> &FbVarScreeninfo {
        &self.var
    }
}

impl DisplayDevice for FramebufferDevice {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        // SAFETY: `map` points at `map_len` bytes mapped read/write for the
        // lifetime of `self`, and `&mut self` guarantees a single borrower.
        unsafe { std::slice::from_raw_parts_mut(self.map.as_ptr(), self.map_len) }
    }
}

impl Drop for FramebufferDevice {
    fn drop(&mut self) {
        // SAFETY: unmapping exactly the region returned by mmap in `open`.
        let rc = unsafe { libc::munmap(self.map.as_ptr() as *mut libc::c_void, self.map_len) };
        if rc != 0 {
            warn!(
                "FramebufferDevice: munmap failed: {}",
                io::Error::last_os_error()
            );
        }
    }
}
