// src/main.rs

use fb_progress::{
    config::CONFIG,
    display::{DeviceError, DisplayDevice, FramebufferDevice, USAGE_EXIT_CODE},
    rasterizer::{FontdueRasterizer, GlyphRasterizer},
    renderer::Renderer,
    RenderError,
};

use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use log::{error, info, warn};
use std::process::ExitCode;

/// Progress value used when none is given on the command line.
const DEFAULT_PERCENT: i64 = 100;

/// Draw a boot progress bar on the Linux framebuffer.
#[derive(Parser, Debug)]
#[command(name = "fb-progress")]
#[command(version)]
#[command(about = "Draw a boot progress bar on the Linux framebuffer")]
struct Cli {
    /// Progress in percent, 0-100 [default: 100]
    #[arg(allow_negative_numbers = true)]
    percent: Option<i64>,
}

/// Main entry point for the `fb-progress` application.
fn main() -> ExitCode {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_exit_code(&e) {
            None => e.exit(),
            Some(code) => {
                // Print clap's own message, but keep its exit code (2) away
                // from the fixed-info failure code.
                let _ = e.print();
                return ExitCode::from(code);
            }
        },
    };
    let percent = cli.percent.unwrap_or(DEFAULT_PERCENT);

    match run(percent) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn run(percent: i64) -> anyhow::Result<()> {
    let config = &*CONFIG;

    // --- Device ---
    let mut device =
        FramebufferDevice::open(&config.device.path).context("Failed to acquire framebuffer")?;

    // --- Font ---
    // A missing font only costs the logo; the bar is still drawn.
    let font = if config.logo.enabled {
        match FontdueRasterizer::from_path(&config.font.path) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Logo disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    // --- Render ---
    let mut surface = device
        .surface()
        .context("Framebuffer cannot be drawn on")?;
    let renderer = Renderer::new(config);
    let rasterizer = font.as_ref().map(|f| f as &dyn GlyphRasterizer);

    match renderer.render_boot_screen(&mut surface, rasterizer, percent) {
        Ok(report) => {
            info!(
                "Progress {}% drawn (filled {} of {} px){}",
                report.progress.percentage.value(),
                report.progress.filled.width(),
                report.progress.bar.width(),
                match &report.logo {
                    Some(run) if !run.skipped.is_empty() => {
                        format!(", logo missing {} glyph(s)", run.skipped.len())
                    }
                    Some(_) => ", logo drawn".to_string(),
                    None => String::new(),
                }
            );
            Ok(())
        }
        Err(RenderError::InvalidProgress(value)) => {
            // Rejected before drawing; not a device failure.
            error!("{}", RenderError::InvalidProgress(value));
            Ok(())
        }
        Err(e) => Err(e).context("Rendering failed"),
    }
}

/// Exit code for a command-line parse failure, or `None` when clap only
/// printed help or version text and the process should succeed.
fn usage_exit_code(err: &clap::Error) -> Option<u8> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(USAGE_EXIT_CODE as u8),
    }
}

/// Maps a fatal error to the process exit code.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    if let Some(device_err) = err.downcast_ref::<DeviceError>() {
        return device_err.exit_code() as u8;
    }
    match err.downcast_ref::<RenderError>() {
        Some(RenderError::UnsupportedDepth(_)) | Some(RenderError::BufferTooSmall { .. }) => 5,
        _ => 1,
    }
}
