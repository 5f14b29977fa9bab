// src/surface/tests.rs

use super::*;
use test_log::test;

fn buffer_for(geometry: &Geometry) -> Vec<u8> {
    vec![0u8; geometry.required_len()]
}

#[test]
fn writes_32bpp_little_endian_at_stride_offset() {
    let geometry = Geometry {
        width: 4,
        height: 3,
        bits_per_pixel: 32,
        stride_bytes: 20, // one pixel of row padding
        x_offset: 0,
        y_offset: 0,
    };
    let mut buf = buffer_for(&geometry);
    {
        let mut surface = PixelSurface::new(&mut buf, geometry).unwrap();
        surface.set_pixel(1, 2, PackedPixel(0xAABB_CCDD));
    }
    let offset = 1 * 4 + 2 * 20;
    assert_eq!(&buf[offset..offset + 4], &[0xDD, 0xCC, 0xBB, 0xAA]);
    assert_eq!(buf.iter().filter(|&&b| b != 0).count(), 4);
}

#[test]
fn writes_16bpp_as_two_bytes() {
    let geometry = Geometry::packed(3, 2, 16);
    let mut buf = buffer_for(&geometry);
    {
        let mut surface = PixelSurface::new(&mut buf, geometry).unwrap();
        surface.set_pixel(2, 1, PackedPixel(0xF800));
    }
    let offset = 2 * 2 + 1 * 6;
    assert_eq!(&buf[offset..offset + 2], &[0x00, 0xF8]);
    assert_eq!(buf.iter().filter(|&&b| b != 0).count(), 1);
}

#[test]
fn pan_offset_shifts_the_visible_origin() {
    let geometry = Geometry {
        width: 2,
        height: 2,
        bits_per_pixel: 32,
        stride_bytes: 16,
        x_offset: 1,
        y_offset: 2,
    };
    let mut buf = buffer_for(&geometry);
    {
        let mut surface = PixelSurface::new(&mut buf, geometry).unwrap();
        surface.set_pixel(0, 0, PackedPixel(0x0102_0304));
        assert_eq!(surface.pixel(0, 0), Some(PackedPixel(0x0102_0304)));
    }
    let offset = (0 + 1) * 4 + (0 + 2) * 16;
    assert_eq!(&buf[offset..offset + 4], &[0x04, 0x03, 0x02, 0x01]);
}

#[test]
fn out_of_bounds_writes_are_clipped() {
    let geometry = Geometry::packed(5, 4, 32);
    let mut buf = buffer_for(&geometry);
    {
        let mut surface = PixelSurface::new(&mut buf, geometry).unwrap();
        let white = surface.pack(Color::WHITE);
        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 4), (i32::MAX, 2), (i32::MIN, i32::MIN)] {
            surface.set_pixel(x, y, white);
            assert_eq!(surface.pixel(x, y), None);
        }
    }
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn unsupported_depth_is_rejected_before_any_write() {
    let geometry = Geometry::packed(4, 4, 24);
    let mut buf = vec![0u8; 4 * 4 * 4];
    match PixelSurface::new(&mut buf, geometry) {
        Err(RenderError::UnsupportedDepth(24)) => {}
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("24 bpp surface must not be created"),
    }
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn short_buffer_is_rejected() {
    let geometry = Geometry::packed(10, 10, 32);
    let mut buf = vec![0u8; 399];
    match PixelSurface::new(&mut buf, geometry) {
        Err(RenderError::BufferTooSmall { required, actual }) => {
            assert_eq!(required, 400);
            assert_eq!(actual, 399);
        }
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("short buffer must be rejected"),
    }
}

#[test]
fn oversized_reported_geometry_is_too_small_not_a_panic() {
    let geometry = Geometry {
        width: u32::MAX,
        height: u32::MAX,
        bits_per_pixel: 32,
        stride_bytes: u32::MAX,
        x_offset: u32::MAX,
        y_offset: u32::MAX,
    };
    let required = geometry.required_len();
    assert!(required as u64 >= u64::from(u32::MAX));

    let mut buf = vec![0u8; 64];
    match PixelSurface::new(&mut buf, geometry) {
        Err(RenderError::BufferTooSmall { actual, .. }) => assert_eq!(actual, 64),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("geometry cannot fit in 64 bytes"),
    }

    let packed = Geometry::packed(u32::MAX, 1, 32);
    assert_eq!(packed.stride_bytes, u32::MAX);
}

#[test]
fn clear_paints_only_the_visible_area() {
    let geometry = Geometry {
        width: 2,
        height: 2,
        bits_per_pixel: 16,
        stride_bytes: 6,
        x_offset: 0,
        y_offset: 0,
    };
    let mut buf = vec![0u8; 12];
    {
        let mut surface = PixelSurface::new(&mut buf, geometry).unwrap();
        surface.clear(Color::WHITE);
        assert_eq!(surface.color_at(1, 1), Some(Color::rgb(0xF8, 0xFC, 0xF8)));
    }
    // Row padding bytes stay untouched.
    assert_eq!(&buf[4..6], &[0, 0]);
    assert_eq!(&buf[10..12], &[0, 0]);
}
