//! Configuration file management
//!
//! Loads TOML configuration files and provides glyph and canvas settings.
//! Default config path: ~/.config/numglyph/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    BACKGROUND_COLOR, CANVAS_PADDING, CROSSING_OFFSET, DEFAULT_MAX_DIGITS, GLYPH_GAP,
    GLYPH_HEIGHT, GLYPH_WIDTH, HELP_CIRCLE_COLOR, HELP_CIRCLE_RADIUS, LINE_WIDTH, OUTPUT_PATH,
    RUN_CIRCLE_RADIUS, START_MARKER_OFFSET, START_MARKER_RADIUS, STROKE_COLOR, TICK_HALF_LENGTH,
};
use crate::glyph::{GlyphOptions, GlyphStyle};
use crate::utils::{parse_hex_color, Color};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glyph behaviour
    pub glyph: GlyphConfig,
    /// Colors and sizes of the drawn marks
    pub style: StyleConfig,
    /// Canvas layout
    pub canvas: CanvasConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Glyph behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Characters of the input used (default: 4)
    pub max_digits: usize,
    /// Draw faint dots on every grid cell
    pub display_help_circles: bool,
}

/// Style settings
/// Colors are RRGGBB or RRGGBBAA hex strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Path and marker color
    pub stroke_color: String,
    /// Path stroke width (pixels)
    pub line_width: f64,
    /// Help grid dot color (translucent by default)
    pub help_circle_color: String,
    /// Help grid dot radius
    pub help_circle_radius: f64,
    /// Half-length of straight-through ticks
    pub tick_half_length: f64,
    /// Radius of the circle drawn on repeated digits
    pub run_circle_radius: f64,
    /// Radius of the start dot
    pub start_marker_radius: f64,
    /// Distance between the first digit and the start dot
    pub start_marker_offset: f64,
    /// Sideways shift of segments that double back
    pub crossing_offset: f64,
}

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width of one glyph (pixels)
    pub glyph_width: u32,
    /// Height of one glyph (pixels)
    pub glyph_height: u32,
    /// Horizontal gap between glyphs
    pub gap: u32,
    /// Border around the row of glyphs
    pub padding: u32,
    /// Background color (RRGGBB or RRGGBBAA)
    pub background: String,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// PNG file written when no --output is given
    pub path: String,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            display_help_circles: false,
        }
    }
}

impl GlyphConfig {
    /// Glyph options; a zero `max_digits` falls back to the default with a warning
    pub fn to_options(&self) -> GlyphOptions {
        let max_digits = if self.max_digits == 0 {
            warn!(
                "glyph.max_digits must be at least 1, using {}",
                DEFAULT_MAX_DIGITS
            );
            DEFAULT_MAX_DIGITS
        } else {
            self.max_digits
        };
        GlyphOptions {
            display_help_circles: self.display_help_circles,
            max_digits,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: STROKE_COLOR.to_string(),
            line_width: LINE_WIDTH,
            help_circle_color: HELP_CIRCLE_COLOR.to_string(),
            help_circle_radius: HELP_CIRCLE_RADIUS,
            tick_half_length: TICK_HALF_LENGTH,
            run_circle_radius: RUN_CIRCLE_RADIUS,
            start_marker_radius: START_MARKER_RADIUS,
            start_marker_offset: START_MARKER_OFFSET,
            crossing_offset: CROSSING_OFFSET,
        }
    }
}

impl StyleConfig {
    pub fn to_style(&self) -> GlyphStyle {
        let defaults = GlyphStyle::default();
        GlyphStyle {
            stroke_color: color_or("style.stroke_color", &self.stroke_color, defaults.stroke_color),
            line_width: self.line_width,
            help_circle_color: color_or(
                "style.help_circle_color",
                &self.help_circle_color,
                defaults.help_circle_color,
            ),
            help_circle_radius: self.help_circle_radius,
            tick_half_length: self.tick_half_length,
            run_circle_radius: self.run_circle_radius,
            start_marker_radius: self.start_marker_radius,
            start_marker_offset: self.start_marker_offset,
            crossing_offset: self.crossing_offset,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            glyph_width: GLYPH_WIDTH,
            glyph_height: GLYPH_HEIGHT,
            gap: GLYPH_GAP,
            padding: CANVAS_PADDING,
            background: BACKGROUND_COLOR.to_string(),
        }
    }
}

impl CanvasConfig {
    /// Background as a color, white if unparsable
    pub fn background_color(&self) -> Color {
        color_or("canvas.background", &self.background, Color::WHITE)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: OUTPUT_PATH.to_string(),
        }
    }
}

/// Parse a config color, falling back to `fallback` with a warning
fn color_or(key: &str, hex: &str, fallback: Color) -> Color {
    parse_hex_color(hex).unwrap_or_else(|| {
        warn!("Invalid color for {}: {:?}, using {}", key, hex, fallback);
        fallback
    })
}

impl Config {
    /// System-wide config path
    const SYSTEM_CONFIG_PATH: &'static str = "/etc/numglyph/config.toml";

    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. NUMGLYPH_CONFIG environment variable
        if let Ok(path) = std::env::var("NUMGLYPH_CONFIG") {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
            warn!("NUMGLYPH_CONFIG points to a missing file: {}", path);
        }

        // 2. User config: ~/.config/numglyph/config.toml
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // 3. System config: /etc/numglyph/config.toml
        let system_config = Path::new(Self::SYSTEM_CONFIG_PATH);
        if system_config.exists() {
            return Some(system_config.to_path_buf());
        }

        None
    }

    /// Load configuration with priority:
    /// 1. NUMGLYPH_CONFIG environment variable
    /// 2. ~/.config/numglyph/config.toml (user config)
    /// 3. /etc/numglyph/config.toml (system config)
    /// 4. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize settings as a commented TOML template
    pub fn to_toml(&self) -> Result<String> {
        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        Ok(format!(
            "# numglyph configuration\n\
             # Colors are RRGGBB or RRGGBBAA hex strings.\n\n{}",
            body
        ))
    }

    /// Write the defaults to `path`, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Write default config to the user config path (for template generation)
    pub fn write_default_config() -> Result<PathBuf> {
        let config_path =
            default_config_path().ok_or_else(|| anyhow::anyhow!("Config directory not found"))?;
        Self::default().write_to(&config_path)?;
        info!("Wrote config template: {}", config_path.display());
        Ok(config_path)
    }
}

/// Get default config file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("numglyph").join("config.toml"))
}
