//! Raster surface
//!
//! Paints into an RGBA pixel buffer. Coverage of every shape comes from a
//! signed distance evaluated at pixel centres, so edges are anti-aliased
//! and overlapping segments of one path never double-blend.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use log::debug;

use super::{LineCap, Painter, StrokeStyle};
use crate::constants::{AA_WIDTH, ALPHA_THRESHOLD};
use crate::drawing::{
    aa_alpha_from_distance, butt_segment_sdf, disc_sdf, distance_to_segment, ring_sdf,
};
use crate::glyph::{Region, Vec2};
use crate::utils::{blend_over, Color};

/// Pixel bounds of a shape: x0, y0 inclusive; x1, y1 exclusive
type PixelBounds = (u32, u32, u32, u32);

#[derive(Debug, Clone)]
pub struct RasterPainter {
    image: RgbaImage,
    background: Color,
    stroke_style: StrokeStyle,
    fill_color: Color,
    subpaths: Vec<Vec<Vec2>>,
}

impl RasterPainter {
    /// Create a `width` × `height` canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba())),
            background,
            stroke_style: StrokeStyle::default(),
            fill_color: Color::default(),
            subpaths: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the canvas as a PNG file
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
        debug!(
            "Wrote {}x{} PNG to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }

    /// Clamp a floating-point bounding box (already padded) to the canvas
    fn pixel_bounds(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<PixelBounds> {
        let w = f64::from(self.width());
        let h = f64::from(self.height());
        let x0 = min_x.floor().clamp(0.0, w);
        let y0 = min_y.floor().clamp(0.0, h);
        let x1 = max_x.ceil().clamp(0.0, w);
        let y1 = max_y.ceil().clamp(0.0, h);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Blend `color` into every pixel of `bounds` whose centre lies inside `sdf`
    fn cover<F>(&mut self, bounds: PixelBounds, color: Color, sdf: F)
    where
        F: Fn(f32, f32) -> f32,
    {
        let (x0, y0, x1, y1) = bounds;
        for y in y0..y1 {
            for x in x0..x1 {
                let d = sdf(x as f32 + 0.5, y as f32 + 0.5);
                let alpha = aa_alpha_from_distance(d, AA_WIDTH);
                if alpha < ALPHA_THRESHOLD {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x, y);
                pixel.0 = blend_over(pixel.0, color, alpha);
            }
        }
    }
}

impl Painter for RasterPainter {
    fn clear_region(&mut self, region: &Region) {
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(
            region.origin_x,
            region.origin_y,
            region.origin_x + region.width,
            region.origin_y + region.height,
        ) else {
            return;
        };
        let background = Rgba(self.background.to_rgba());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, background);
            }
        }
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.stroke_style = style;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, point: Vec2) {
        self.subpaths.push(vec![point]);
    }

    fn line_to(&mut self, point: Vec2) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            // Like a canvas context: a line without a start point only sets one
            None => self.subpaths.push(vec![point]),
        }
    }

    fn stroke(&mut self) {
        let segments: Vec<[f32; 4]> = self
            .subpaths
            .iter()
            .flat_map(|subpath| subpath.windows(2))
            .map(|pair| {
                [
                    pair[0].x as f32,
                    pair[0].y as f32,
                    pair[1].x as f32,
                    pair[1].y as f32,
                ]
            })
            .collect();
        if segments.is_empty() {
            return;
        }

        let style = self.stroke_style;
        let half_width = (style.width / 2.0) as f32;
        let pad = f64::from(half_width + AA_WIDTH);

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for s in &segments {
            min_x = min_x.min(f64::from(s[0].min(s[2])));
            min_y = min_y.min(f64::from(s[1].min(s[3])));
            max_x = max_x.max(f64::from(s[0].max(s[2])));
            max_y = max_y.max(f64::from(s[1].max(s[3])));
        }
        let Some(bounds) = self.pixel_bounds(min_x - pad, min_y - pad, max_x + pad, max_y + pad)
        else {
            return;
        };

        // Joins follow from the caps, `style.join` is not consulted
        match style.cap {
            LineCap::Round => self.cover(bounds, style.color, |px, py| {
                let d = segments
                    .iter()
                    .map(|s| distance_to_segment(px, py, s[0], s[1], s[2], s[3]))
                    .fold(f32::INFINITY, f32::min);
                half_width - d
            }),
            LineCap::Butt => self.cover(bounds, style.color, |px, py| {
                segments
                    .iter()
                    .map(|s| butt_segment_sdf(px, py, s[0], s[1], s[2], s[3], half_width))
                    .fold(f32::NEG_INFINITY, f32::max)
            }),
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64) {
        let pad = radius + f64::from(AA_WIDTH);
        let Some(bounds) =
            self.pixel_bounds(center.x - pad, center.y - pad, center.x + pad, center.y + pad)
        else {
            return;
        };
        let (cx, cy, r) = (center.x as f32, center.y as f32, radius as f32);
        self.cover(bounds, self.fill_color, |px, py| disc_sdf(px, py, cx, cy, r));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64) {
        let style = self.stroke_style;
        let half_width = (style.width / 2.0) as f32;
        let pad = radius + f64::from(half_width + AA_WIDTH);
        let Some(bounds) =
            self.pixel_bounds(center.x - pad, center.y - pad, center.x + pad, center.y + pad)
        else {
            return;
        };
        let (cx, cy, r) = (center.x as f32, center.y as f32, radius as f32);
        self.cover(bounds, style.color, |px, py| {
            ring_sdf(px, py, cx, cy, r, half_width)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::LineJoin;

    const RED: Color = Color::rgb(255, 0, 0);
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn red_stroke(width: f64, cap: LineCap) -> StrokeStyle {
        StrokeStyle {
            color: RED,
            width,
            cap,
            join: LineJoin::Round,
        }
    }

    #[test]
    fn test_new_canvas_is_background() {
        let painter = RasterPainter::new(4, 3, Color::WHITE);
        assert_eq!(painter.width(), 4);
        assert_eq!(painter.height(), 3);
        assert_eq!(painter.pixel(3, 2), WHITE);
    }

    #[test]
    fn test_stroke_horizontal_line() {
        let mut painter = RasterPainter::new(40, 20, Color::WHITE);
        painter.set_stroke_style(red_stroke(4.0, LineCap::Round));
        painter.begin_path();
        painter.move_to(Vec2::new(5.0, 10.0));
        painter.line_to(Vec2::new(35.0, 10.0));
        painter.stroke();

        // On the line
        assert_eq!(painter.pixel(20, 9), [255, 0, 0, 255]);
        assert_eq!(painter.pixel(20, 10), [255, 0, 0, 255]);
        // Well away from it
        assert_eq!(painter.pixel(20, 2), WHITE);
        assert_eq!(painter.pixel(20, 17), WHITE);
    }

    #[test]
    fn test_join_style_does_not_change_raster() {
        let corner = |join: LineJoin| {
            let mut painter = RasterPainter::new(40, 40, Color::WHITE);
            painter.set_stroke_style(StrokeStyle {
                join,
                ..red_stroke(6.0, LineCap::Round)
            });
            painter.begin_path();
            painter.move_to(Vec2::new(5.0, 30.0));
            painter.line_to(Vec2::new(20.0, 10.0));
            painter.line_to(Vec2::new(35.0, 30.0));
            painter.stroke();
            painter
        };
        assert_eq!(
            corner(LineJoin::Miter).image().as_raw(),
            corner(LineJoin::Round).image().as_raw()
        );
    }

    #[test]
    fn test_round_cap_extends_past_endpoint() {
        let mut round = RasterPainter::new(40, 20, Color::WHITE);
        round.set_stroke_style(red_stroke(6.0, LineCap::Round));
        round.begin_path();
        round.move_to(Vec2::new(10.0, 10.0));
        round.line_to(Vec2::new(30.0, 10.0));
        round.stroke();

        let mut butt = RasterPainter::new(40, 20, Color::WHITE);
        butt.set_stroke_style(red_stroke(6.0, LineCap::Butt));
        butt.begin_path();
        butt.move_to(Vec2::new(10.0, 10.0));
        butt.line_to(Vec2::new(30.0, 10.0));
        butt.stroke();

        // Pixel centre (31.5, 10.5) lies past the end by 1.5px
        assert_eq!(round.pixel(31, 10), [255, 0, 0, 255]);
        assert_eq!(butt.pixel(31, 10), WHITE);
        // Both cover the middle
        assert_eq!(butt.pixel(20, 10), [255, 0, 0, 255]);
    }

    #[test]
    fn test_move_to_only_strokes_nothing() {
        let mut painter = RasterPainter::new(10, 10, Color::WHITE);
        painter.set_stroke_style(red_stroke(4.0, LineCap::Round));
        painter.begin_path();
        painter.move_to(Vec2::new(5.0, 5.0));
        painter.stroke();
        assert!(painter.image().pixels().all(|p| p.0 == WHITE));
    }

    #[test]
    fn test_begin_path_discards_previous_path() {
        let mut painter = RasterPainter::new(40, 20, Color::WHITE);
        painter.set_stroke_style(red_stroke(2.0, LineCap::Round));
        painter.begin_path();
        painter.move_to(Vec2::new(0.0, 2.0));
        painter.line_to(Vec2::new(40.0, 2.0));
        painter.begin_path();
        painter.stroke();
        assert_eq!(painter.pixel(20, 2), WHITE);
    }

    #[test]
    fn test_fill_circle() {
        let mut painter = RasterPainter::new(20, 20, Color::WHITE);
        painter.set_fill_style(RED);
        painter.fill_circle(Vec2::new(10.0, 10.0), 4.0);
        assert_eq!(painter.pixel(10, 10), [255, 0, 0, 255]);
        assert_eq!(painter.pixel(1, 1), WHITE);
    }

    #[test]
    fn test_stroke_circle_leaves_centre_empty() {
        let mut painter = RasterPainter::new(40, 40, Color::WHITE);
        painter.set_stroke_style(red_stroke(2.0, LineCap::Round));
        painter.stroke_circle(Vec2::new(20.0, 20.0), 10.0);
        // Ring passes through (30, 20); pixel (29, 19) has centre (29.5, 19.5)
        assert_eq!(painter.pixel(29, 19), [255, 0, 0, 255]);
        assert_eq!(painter.pixel(20, 20), WHITE);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut painter = RasterPainter::new(20, 20, Color::WHITE);
        painter.set_fill_style(Color::rgba(0, 0, 0, 128));
        painter.fill_circle(Vec2::new(10.0, 10.0), 5.0);
        let p = painter.pixel(10, 10);
        assert!(p[0] > 100 && p[0] < 155, "got {p:?}");
        assert_eq!(p[3], 255);
    }

    #[test]
    fn test_clear_region_restores_background() {
        let mut painter = RasterPainter::new(20, 20, Color::WHITE);
        painter.set_fill_style(RED);
        painter.fill_circle(Vec2::new(10.0, 10.0), 8.0);
        painter.clear_region(&Region::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(painter.pixel(10, 5), WHITE);
        assert_eq!(painter.pixel(10, 12), [255, 0, 0, 255]);
    }

    #[test]
    fn test_shapes_outside_canvas_are_clipped() {
        let mut painter = RasterPainter::new(10, 10, Color::WHITE);
        painter.set_fill_style(RED);
        painter.fill_circle(Vec2::new(-50.0, -50.0), 5.0);
        painter.clear_region(&Region::new(100.0, 100.0, 5.0, 5.0));
        assert!(painter.image().pixels().all(|p| p.0 == WHITE));
    }

    #[test]
    fn test_save_png() {
        let mut painter = RasterPainter::new(8, 8, Color::WHITE);
        painter.set_fill_style(RED);
        painter.fill_circle(Vec2::new(4.0, 4.0), 3.0);

        let path = std::env::temp_dir().join(format!("numglyph-raster-{}.png", std::process::id()));
        painter.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (8, 8));
        assert_eq!(loaded.get_pixel(4, 4).0, [255, 0, 0, 255]);
    }
}
