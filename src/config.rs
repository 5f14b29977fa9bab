// src/config.rs

//! Configuration for the boot progress screen.
//!
//! Everything that was a hard-coded constant in earlier boot splash tools
//! (device node, font file, bar proportions, colors, the logo string) lives
//! here. The structs deserialize from JSON with every field optional; missing
//! fields take the defaults below.
//!
//! The file is located through the `FB_PROGRESS_CONFIG` environment variable.
//! Without it the built-in defaults apply.

use crate::color::Color;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "FB_PROGRESS_CONFIG";

/// Process-wide configuration, loaded on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Framebuffer device settings.
    pub device: DeviceConfig,
    /// Font used for the logo.
    pub font: FontConfig,
    /// Progress bar proportions and colors.
    pub progress: ProgressConfig,
    /// Logo text drawn above the bar.
    pub logo: LogoConfig,
}

impl Config {
    /// Reads the file named by `FB_PROGRESS_CONFIG`, falling back to defaults
    /// (with a warning) if it is missing or malformed.
    pub fn load_or_default() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            None => {
                debug!("{} not set, using built-in configuration", CONFIG_ENV_VAR);
                Config::default()
            }
            Some(path) => {
                let path = PathBuf::from(path);
                match Config::from_file(&path) {
                    Ok(config) => {
                        debug!("Configuration loaded from {:?}", path);
                        config
                    }
                    Err(e) => {
                        warn!("Ignoring config file {:?}: {:#}", path, e);
                        Config::default()
                    }
                }
            }
        }
    }

    /// Parses a JSON config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        serde_json::from_str(&text).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Half-width bar on a grey track, green at every percentage, no logo.
    pub fn compact() -> Self {
        Config {
            progress: ProgressConfig {
                width_percent: 50,
                height_percent: 10,
                color: Color::rgb(0, 255, 0),
                complete_color: Color::rgb(0, 255, 0),
                background_color: Color::rgb(100, 100, 100),
            },
            logo: LogoConfig {
                enabled: false,
                ..LogoConfig::default()
            },
            ..Config::default()
        }
    }
}

// --- Device Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Framebuffer device node.
    pub path: PathBuf,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            path: PathBuf::from("/dev/fb0"),
        }
    }
}

// --- Font Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// TrueType/OpenType file to rasterize from.
    pub path: PathBuf,
    /// Resolution used to turn point sizes into pixels (`px = pt * dpi / 72`).
    pub dpi: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            path: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            dpi: 30,
        }
    }
}

impl FontConfig {
    /// Pixel size for a point size at this resolution, at least 1.
    pub fn points_to_pixels(&self, points: u32) -> u32 {
        ((points as u64 * self.dpi as u64) / 72).clamp(1, u32::MAX as u64) as u32
    }
}

// --- Progress Bar Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Bar width as a percentage of the screen width.
    pub width_percent: u32,
    /// Bar height as a percentage of the screen height.
    pub height_percent: u32,
    /// Fill color below 100 %.
    pub color: Color,
    /// Fill color at exactly 100 %.
    pub complete_color: Color,
    /// Track color drawn under the fill.
    pub background_color: Color,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        ProgressConfig {
            width_percent: 70,
            height_percent: 10,
            color: Color::rgb(0, 255, 0),
            complete_color: Color::rgb(255, 0, 0),
            background_color: Color::rgb(0, 50, 0),
        }
    }
}

// --- Logo Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub enabled: bool,
    pub text: String,
    pub color: Color,
    /// Font size in points is the screen width divided by this.
    pub size_divisor: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        LogoConfig {
            enabled: true,
            text: "W A L N U T    P I".to_string(),
            color: Color::rgb(100, 100, 100),
            size_divisor: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_log::test;

    #[test]
    fn defaults_match_the_stock_boot_screen() {
        let config = Config::default();
        assert_eq!(config.device.path, PathBuf::from("/dev/fb0"));
        assert_eq!(config.progress.width_percent, 70);
        assert_eq!(config.progress.complete_color, Color::rgb(255, 0, 0));
        assert!(config.logo.enabled);
        assert_eq!(config.font.dpi, 30);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "device": {{ "path": "/dev/fb1" }}, "progress": {{ "color": {{ "r": 1, "g": 2, "b": 3 }} }} }}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.device.path, PathBuf::from("/dev/fb1"));
        assert_eq!(config.progress.color, Color::rgb(1, 2, 3));
        assert_eq!(config.progress.background_color, Color::rgb(0, 50, 0));
        assert_eq!(config.logo, LogoConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn config_survives_a_json_round_trip() {
        let config = Config::compact();
        let text = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
        assert!(!back.logo.enabled);
    }

    #[test]
    fn points_convert_at_configured_dpi() {
        let font = FontConfig::default();
        // 80 pt at 30 dpi
        assert_eq!(font.points_to_pixels(80), 33);
        assert_eq!(font.points_to_pixels(0), 1);
    }
}
