//! End-to-end boot screen tests against the headless display device.
//!
//! These drive the public API the same way the CLI does:
//! device → surface → renderer → inspect the raster memory.

use fb_progress::color::{Color, PixelDepth};
use fb_progress::config::Config;
use fb_progress::display::{DisplayDevice, HeadlessDevice};
use fb_progress::rasterizer::{GlyphRasterizer, HeadlessRasterizer};
use fb_progress::renderer::Renderer;
use fb_progress::shapes::{draw_line, Position};
use fb_progress::{Geometry, RenderError};

// =============================================================================
// Helpers
// =============================================================================

fn pixel_at(device: &HeadlessDevice, x: u32, y: u32) -> u32 {
    let g = device.geometry();
    let bpp = (g.bits_per_pixel / 8) as usize;
    let offset = (x + g.x_offset) as usize * bpp + (y + g.y_offset) as usize * g.stride_bytes as usize;
    let bytes = &device.buffer()[offset..offset + bpp];
    match bpp {
        2 => u16::from_le_bytes([bytes[0], bytes[1]]) as u32,
        _ => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    }
}

fn render(device: &mut HeadlessDevice, config: &Config, percent: i64) -> Result<(), RenderError> {
    let rasterizer = HeadlessRasterizer::new();
    let mut surface = device.surface()?;
    Renderer::new(config)
        .render_boot_screen(&mut surface, Some(&rasterizer as &dyn GlyphRasterizer), percent)
        .map(|_| ())
}

// =============================================================================
// 800x480 @ 32bpp
// =============================================================================

#[test]
fn zero_percent_shows_only_the_track() {
    let config = Config::default();
    let mut device = HeadlessDevice::new(Geometry::packed(800, 480, 32));
    render(&mut device, &config, 0).unwrap();

    let track = PixelDepth::Argb8888.pack(config.progress.background_color).value();
    for x in 120..680 {
        assert_eq!(pixel_at(&device, x, 216), track, "x = {}", x);
        assert_eq!(pixel_at(&device, x, 263), track, "x = {}", x);
    }
    assert_eq!(pixel_at(&device, 119, 216), 0);
    assert_eq!(pixel_at(&device, 680, 216), 0);
}

#[test]
fn full_progress_spans_the_bar_in_the_complete_color() {
    let config = Config::default();
    let mut device = HeadlessDevice::new(Geometry::packed(800, 480, 32));
    render(&mut device, &config, 100).unwrap();

    let complete = PixelDepth::Argb8888.pack(config.progress.complete_color).value();
    for y in 216..264 {
        for x in 120..680 {
            assert_eq!(pixel_at(&device, x, y), complete);
        }
    }
}

#[test]
fn out_of_range_progress_leaves_the_device_untouched() {
    let config = Config::default();
    let mut device = HeadlessDevice::new(Geometry::packed(800, 480, 32));
    match render(&mut device, &config, 150) {
        Err(RenderError::InvalidProgress(150)) => {}
        other => panic!("expected InvalidProgress, got {:?}", other),
    }
    assert!(device.buffer().iter().all(|&b| b == 0));
}

// =============================================================================
// Other device shapes
// =============================================================================

#[test]
fn padded_panned_16bpp_device_is_addressed_through_stride_and_offset() {
    let geometry = Geometry {
        width: 320,
        height: 240,
        bits_per_pixel: 16,
        stride_bytes: 1024,
        x_offset: 8,
        y_offset: 240,
    };
    let config = Config::default();
    let mut device = HeadlessDevice::new(geometry);
    render(&mut device, &config, 50).unwrap();

    // Bar: 224x24 at (48, 108); half filled.
    let green = PixelDepth::Rgb565.pack(Color::rgb(0, 255, 0)).value();
    let track = PixelDepth::Rgb565.pack(config.progress.background_color).value();
    assert_eq!(pixel_at(&device, 48, 108), green);
    assert_eq!(pixel_at(&device, 48 + 111, 131), green);
    assert_eq!(pixel_at(&device, 48 + 112, 108), track);

    // Nothing lands in the hidden first page.
    let hidden = 240 * 1024;
    assert!(device.buffer()[..hidden].iter().all(|&b| b == 0));
}

#[test]
fn unsupported_depth_fails_before_drawing() {
    let mut device = HeadlessDevice::new(Geometry::packed(64, 64, 24));
    match render(&mut device, &Config::default(), 50) {
        Err(RenderError::UnsupportedDepth(24)) => {}
        other => panic!("expected UnsupportedDepth, got {:?}", other),
    }
    assert!(device.buffer().iter().all(|&b| b == 0));
}

#[test]
fn outline_drawn_over_the_bar_stays_on_screen() {
    let config = Config::default();
    let mut device = HeadlessDevice::new(Geometry::packed(100, 50, 32));
    render(&mut device, &config, 30).unwrap();

    let mut surface = device.surface().unwrap();
    let white = surface.pack(Color::WHITE);
    draw_line(&mut surface, Position::new(-10, 0), Position::new(120, 0), white, 3);
    drop(surface);

    for x in 0..100 {
        assert_eq!(pixel_at(&device, x, 0), 0xFFFF_FFFF);
        assert_eq!(pixel_at(&device, x, 1), 0xFFFF_FFFF);
    }
}
