//! Vector math for glyph geometry
//!
//! Two flavours of 2D vector live here:
//! - [`Vec2`]: real-valued pixel positions and displacements
//! - [`Direction`]: sign-quantized displacement, one of 8 compass directions or none

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::GlyphError;

/// Real-valued 2D point or displacement (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Direction of travel between two grid cells.
///
/// Components are always -1, 0 or 1. Only used for equality and
/// oppositeness checks, never for magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction {
    pub x: i8,
    pub y: i8,
}

impl Direction {
    /// "No further movement"
    pub const NONE: Self = Self { x: 0, y: 0 };

    /// Quantize a displacement to its componentwise sign
    pub fn from_delta(delta: Vec2) -> Self {
        Self {
            x: sign(delta.x),
            y: sign(delta.y),
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Rotate 90°: (x, y) -> (-y, x)
    ///
    /// The zero direction has no unique perpendicular.
    pub fn perpendicular(self) -> Result<Self, GlyphError> {
        if self.is_zero() {
            return Err(GlyphError::ZeroDirection);
        }
        Ok(Self {
            x: -self.y,
            y: self.x,
        })
    }

    pub fn is_same(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn is_opposite(self, other: Self) -> bool {
        self.x == -other.x && self.y == -other.y
    }
}

/// Linear interpolation of `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// No domain validation: `in_min` must differ from `in_max`.
#[inline]
pub fn lerp(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Sign of `n` as -1, 0 or 1. Negative zero and NaN map to 0.
#[inline]
pub fn sign(n: f64) -> i8 {
    if n > 0.0 {
        1
    } else if n < 0.0 {
        -1
    } else {
        0
    }
}

/// Displacement from `a` to `b`
#[inline]
pub fn vector(a: Vec2, b: Vec2) -> Vec2 {
    b - a
}

/// Scale `v` to unit length.
pub fn normalize(v: Vec2) -> Result<Vec2, GlyphError> {
    let length = v.length();
    if length == 0.0 {
        return Err(GlyphError::ZeroVector);
    }
    Ok(Vec2::new(v.x / length, v.y / length))
}

/// Rotate 90°: (x, y) -> (-y, x)
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Unit vector perpendicular to the line from `a` to `b`
pub fn unit_normal(a: Vec2, b: Vec2) -> Result<Vec2, GlyphError> {
    normalize(perpendicular(vector(a, b)))
}
