//! Recording surface
//!
//! Stores every call as a [`DrawOp`] instead of drawing it.

use super::{DrawOp, Painter, StrokeStyle};
use crate::glyph::{Region, Vec2};
use crate::utils::Color;

#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    ops: Vec<DrawOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for RecordingPainter {
    fn clear_region(&mut self, region: &Region) {
        self.ops.push(DrawOp::ClearRegion(*region));
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.ops.push(DrawOp::SetStrokeStyle(style));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFillStyle(color));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, point: Vec2) {
        self.ops.push(DrawOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Vec2) {
        self.ops.push(DrawOp::LineTo(point));
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64) {
        self.ops.push(DrawOp::FillCircle { center, radius });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64) {
        self.ops.push(DrawOp::StrokeCircle { center, radius });
    }
}
