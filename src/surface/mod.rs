//! Drawing surfaces
//!
//! A [`Painter`] is a stateful 2D drawing surface in the style of an HTML
//! canvas context: styles are set first and apply to every following
//! primitive. Glyph rendering produces a display list of [`DrawOp`]s that
//! is replayed onto any painter.
//!
//! Two surfaces ship with the crate:
//! - [`RecordingPainter`]: stores the operations (tests, `--dump`)
//! - [`RasterPainter`]: anti-aliased RGBA pixel buffer with PNG output

use std::fmt;

use crate::glyph::{Region, Vec2};
use crate::utils::Color;

pub mod raster;
pub mod recorder;

pub use raster::RasterPainter;
pub use recorder::RecordingPainter;

/// Line-cap style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Line-join style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

/// Everything a stroke needs besides its geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    /// Recorded as given but ignored by [`RasterPainter`]: round-capped
    /// paths join round, butt-capped paths are the union of their segments.
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }
}

/// Capability interface of a 2D drawing surface
pub trait Painter {
    /// Reset a rectangular area to the surface background
    fn clear_region(&mut self, region: &Region);
    fn set_stroke_style(&mut self, style: StrokeStyle);
    fn set_fill_style(&mut self, color: Color);
    /// Discard the current path and start a new one
    fn begin_path(&mut self);
    /// Start a new subpath at `point`
    fn move_to(&mut self, point: Vec2);
    /// Extend the current subpath with a straight line to `point`
    fn line_to(&mut self, point: Vec2);
    /// Stroke the current path with the current stroke style
    fn stroke(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f64);
    fn stroke_circle(&mut self, center: Vec2, radius: f64);
}

/// One recorded painter call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    ClearRegion(Region),
    SetStrokeStyle(StrokeStyle),
    SetFillStyle(Color),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Stroke,
    FillCircle { center: Vec2, radius: f64 },
    StrokeCircle { center: Vec2, radius: f64 },
}

impl DrawOp {
    /// Issue this operation on `painter`
    pub fn apply<P: Painter + ?Sized>(&self, painter: &mut P) {
        match *self {
            Self::ClearRegion(region) => painter.clear_region(&region),
            Self::SetStrokeStyle(style) => painter.set_stroke_style(style),
            Self::SetFillStyle(color) => painter.set_fill_style(color),
            Self::BeginPath => painter.begin_path(),
            Self::MoveTo(point) => painter.move_to(point),
            Self::LineTo(point) => painter.line_to(point),
            Self::Stroke => painter.stroke(),
            Self::FillCircle { center, radius } => painter.fill_circle(center, radius),
            Self::StrokeCircle { center, radius } => painter.stroke_circle(center, radius),
        }
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClearRegion(r) => write!(
                f,
                "clear_region ({:.2}, {:.2}) {:.2}x{:.2}",
                r.origin_x, r.origin_y, r.width, r.height
            ),
            Self::SetStrokeStyle(s) => write!(
                f,
                "set_stroke_style {} width={:.2} cap={:?} join={:?}",
                s.color, s.width, s.cap, s.join
            ),
            Self::SetFillStyle(color) => write!(f, "set_fill_style {color}"),
            Self::BeginPath => write!(f, "begin_path"),
            Self::MoveTo(p) => write!(f, "move_to {p}"),
            Self::LineTo(p) => write!(f, "line_to {p}"),
            Self::Stroke => write!(f, "stroke"),
            Self::FillCircle { center, radius } => {
                write!(f, "fill_circle {center} r={radius:.2}")
            }
            Self::StrokeCircle { center, radius } => {
                write!(f, "stroke_circle {center} r={radius:.2}")
            }
        }
    }
}

/// Replay a display list onto `painter`, in order
pub fn replay<P: Painter + ?Sized>(ops: &[DrawOp], painter: &mut P) {
    for op in ops {
        op.apply(painter);
    }
}
