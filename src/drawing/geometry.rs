//! Signed-distance primitives for anti-aliased rasterization
//!
//! Every shape the raster surface draws is described by a signed distance
//! (positive inside, negative outside) that is turned into pixel coverage.

/// Smoothstep interpolation for anti-aliasing.
///
/// Returns smooth transition from 0 to 1 as t goes from 0 to 1.
/// Uses Hermite interpolation: 3t² - 2t³
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Compute anti-aliased alpha from signed distance.
///
/// # Arguments
/// * `d` - Signed distance to shape boundary (positive = inside)
/// * `aa_width` - Width of the anti-aliasing transition zone
///
/// # Returns
/// * `d >= 0`: 1.0 (fully inside)
/// * `d < -aa_width`: 0.0 (fully outside)
/// * Otherwise: smooth transition using smoothstep
#[inline]
pub fn aa_alpha_from_distance(d: f32, aa_width: f32) -> f32 {
    if d >= 0.0 {
        1.0
    } else {
        let t = (d / aa_width + 1.0).clamp(0.0, 1.0);
        smoothstep(t)
    }
}

/// Calculate shortest distance from point P to line segment AB.
///
/// A degenerate segment (A == B) yields the distance to A, so a zero-length
/// round-capped stroke still paints a dot.
///
/// # Algorithm
/// 1. Compute vectors: v = B - A (segment direction), w = P - A (point offset)
/// 2. Project P onto infinite line AB: t = dot(v, w) / dot(v, v)
/// 3. Clamp t to [0, 1] to stay within segment
/// 4. Return distance from P to the clamped projection point
#[inline]
pub fn distance_to_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let vx = bx - ax;
    let vy = by - ay;
    let wx = px - ax;
    let wy = py - ay;

    let c1 = vx * wx + vy * wy;
    if c1 <= 0.0 {
        // Before segment start: closest point is A
        return (wx * wx + wy * wy).sqrt();
    }

    let c2 = vx * vx + vy * vy;
    if c2 <= c1 {
        // After segment end: closest point is B
        let dx = px - bx;
        let dy = py - by;
        return (dx * dx + dy * dy).sqrt();
    }

    let t = c1 / c2;
    let proj_x = ax + t * vx;
    let proj_y = ay + t * vy;
    let dx = px - proj_x;
    let dy = py - proj_y;
    (dx * dx + dy * dy).sqrt()
}

/// Signed distance to a butt-capped stroke of half-width `half_width` along AB.
///
/// The stroke is the rectangle swept by AB, ending flush at both endpoints.
/// A degenerate segment covers nothing.
#[inline]
pub fn butt_segment_sdf(
    px: f32,
    py: f32,
    ax: f32,
    ay: f32,
    bx: f32,
    by: f32,
    half_width: f32,
) -> f32 {
    let vx = bx - ax;
    let vy = by - ay;
    let len = (vx * vx + vy * vy).sqrt();
    if len <= f32::EPSILON {
        return f32::NEG_INFINITY;
    }

    let wx = px - ax;
    let wy = py - ay;
    // Position along AB and distance from the infinite line, both in pixels
    let along = (vx * wx + vy * wy) / len;
    let across = (vx * wy - vy * wx).abs() / len;

    let side = half_width - across;
    let ends = along.min(len - along);
    side.min(ends)
}

/// Signed distance to a filled circle.
#[inline]
pub fn disc_sdf(px: f32, py: f32, cx: f32, cy: f32, radius: f32) -> f32 {
    let dx = px - cx;
    let dy = py - cy;
    radius - (dx * dx + dy * dy).sqrt()
}

/// Signed distance to a circle outline of half-width `half_width`.
#[inline]
pub fn ring_sdf(px: f32, py: f32, cx: f32, cy: f32, radius: f32, half_width: f32) -> f32 {
    half_width - disc_sdf(px, py, cx, cy, radius).abs()
}
