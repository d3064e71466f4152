//! Color parsing and blending utilities
//!
//! Colors come from config as hex strings and end up as RGBA pixels.

use std::fmt;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Return the color as an `[r, g, b, a]` byte array
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Alpha as 0.0-1.0
    pub fn alpha(self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Parse hex color (e.g., "cd5c5c" -> indianred)
///
/// Accepts RRGGBB, RRGGBBAA and the 3-digit short form, with or without
/// a leading `#`. Returns None on invalid input.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        6 => Some(Color::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Some(Color::rgba(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
        3 => {
            // Short format: expand F -> FF
            let r = byte(0..1)? * 17;
            let g = byte(1..2)? * 17;
            let b = byte(2..3)? * 17;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

/// Composite `color` over `base` (source-over).
///
/// `coverage` scales the source alpha (0.0 = untouched, 1.0 = full color alpha).
pub fn blend_over(base: [u8; 4], color: Color, coverage: f32) -> [u8; 4] {
    let src_a = color.alpha() * coverage.clamp(0.0, 1.0);
    let dst_a = base[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |src: u8, dst: u8| -> u8 {
        let src = src as f32 / 255.0;
        let dst = dst as f32 / 255.0;
        let out = (src * src_a + dst * dst_a * (1.0 - src_a)) / out_a;
        (out * 255.0).round().clamp(0.0, 255.0) as u8
    };

    [
        channel(color.r, base[0]),
        channel(color.g, base[1]),
        channel(color.b, base[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#cd5c5c"), Some(Color::rgb(205, 92, 92)));
        assert_eq!(parse_hex_color("f00"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("bfbfbf1a"), Some(Color::rgba(191, 191, 191, 26)));
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("ééé"), None);
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let color = Color::rgba(191, 191, 191, 26);
        assert_eq!(color.to_string(), "#bfbfbf1a");
        assert_eq!(parse_hex_color(&color.to_string()), Some(color));
        assert_eq!(Color::rgb(205, 92, 92).to_string(), "#cd5c5c");
    }

    #[test]
    fn test_blend_over() {
        let white = [255, 255, 255, 255];
        // Opaque color with full coverage replaces the base
        assert_eq!(blend_over(white, Color::rgb(255, 0, 0), 1.0), [255, 0, 0, 255]);
        // Zero coverage leaves the base untouched
        assert_eq!(blend_over(white, Color::rgb(255, 0, 0), 0.0), white);
        // Half coverage mixes
        let mixed = blend_over(white, Color::rgb(0, 0, 0), 0.5);
        assert!((mixed[0] as i32 - 128).abs() <= 1);
        assert_eq!(mixed[3], 255);
    }

    #[test]
    fn test_blend_over_transparent_base() {
        let out = blend_over([0, 0, 0, 0], Color::rgba(255, 0, 0, 255), 1.0);
        assert_eq!(out, [255, 0, 0, 255]);
        assert_eq!(blend_over([0, 0, 0, 0], Color::rgba(0, 0, 0, 0), 1.0), [0, 0, 0, 0]);
    }
}
