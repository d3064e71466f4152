//! Glyph path rendering
//!
//! Builds the display list for one glyph. Primitive groups are emitted in a
//! fixed order, which only affects stacking:
//!
//! 1. Help grid (optional)
//! 2. Start marker
//! 3. Main path through the de-duplicated digits
//! 4. Ticks where the path runs straight through a digit
//! 5. Circles (and cross lines) on runs of repeated digits
//! 6. Offset copies of segments that double back on an earlier direction

use super::vector::{normalize, unit_normal, vector, Vec2};
use super::{collapse_adjacent_duplicates, coordinate_of, Glyph};
use crate::constants::{
    CROSSING_OFFSET, HELP_CIRCLE_COLOR, HELP_CIRCLE_RADIUS, LINE_WIDTH, RUN_CIRCLE_RADIUS,
    START_MARKER_OFFSET, START_MARKER_RADIUS, STROKE_COLOR, TICK_HALF_LENGTH,
};
use crate::error::GlyphError;
use crate::surface::{DrawOp, LineCap, LineJoin, StrokeStyle};
use crate::utils::{parse_hex_color, Color};

/// Colors and sizes used when drawing a glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub stroke_color: Color,
    pub line_width: f64,
    pub help_circle_color: Color,
    pub help_circle_radius: f64,
    pub tick_half_length: f64,
    pub run_circle_radius: f64,
    pub start_marker_radius: f64,
    pub start_marker_offset: f64,
    pub crossing_offset: f64,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            stroke_color: parse_hex_color(STROKE_COLOR).unwrap_or_default(),
            line_width: LINE_WIDTH,
            help_circle_color: parse_hex_color(HELP_CIRCLE_COLOR).unwrap_or_default(),
            help_circle_radius: HELP_CIRCLE_RADIUS,
            tick_half_length: TICK_HALF_LENGTH,
            run_circle_radius: RUN_CIRCLE_RADIUS,
            start_marker_radius: START_MARKER_RADIUS,
            start_marker_offset: START_MARKER_OFFSET,
            crossing_offset: CROSSING_OFFSET,
        }
    }
}

impl GlyphStyle {
    /// Round-capped stroke used for the path and the markers
    pub fn path_stroke(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color,
            width: self.line_width,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }

    /// Flat-ended stroke used for same-direction ticks
    pub fn tick_stroke(&self) -> StrokeStyle {
        StrokeStyle {
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            ..self.path_stroke()
        }
    }
}

impl Glyph {
    /// Build the complete display list for the current number.
    ///
    /// # Errors
    /// - [`GlyphError::NumberNotSet`] if no number with digits is set
    /// - [`GlyphError::ZeroVector`] if the start marker has no direction to
    ///   point away from (every digit maps to the same cell)
    pub fn render(&self) -> Result<Vec<DrawOp>, GlyphError> {
        if !self.is_ready() {
            return Err(GlyphError::NumberNotSet);
        }

        let mut ops = vec![DrawOp::ClearRegion(*self.region())];

        if self.options().display_help_circles {
            self.push_help_circles(&mut ops);
        }
        if !self.is_single_full_run() {
            self.push_start_marker(&mut ops)?;
        }
        self.push_main_path(&mut ops);
        self.push_same_direction_ticks(&mut ops)?;
        self.push_run_markers(&mut ops);
        self.push_crossing_offsets(&mut ops);

        Ok(ops)
    }

    /// True when the whole sequence is one digit repeated `max_digits` times
    fn is_single_full_run(&self) -> bool {
        match self.runs() {
            [run] => Some(run.occurrence) == self.options().max_digits.checked_sub(1),
            _ => false,
        }
    }

    fn push_help_circles(&self, ops: &mut Vec<DrawOp>) {
        let style = self.style();
        ops.push(DrawOp::SetFillStyle(style.help_circle_color));
        for center in self.region().cell_centers() {
            ops.push(DrawOp::FillCircle {
                center,
                radius: style.help_circle_radius,
            });
        }
    }

    /// Dot just before the first digit, on the side away from the path
    fn push_start_marker(&self, ops: &mut Vec<DrawOp>) -> Result<(), GlyphError> {
        let coordinates = self.coordinates();
        let Some(&first) = coordinates.first() else {
            return Err(GlyphError::NumberNotSet);
        };
        // Skip leading repeats of the first cell
        let second = coordinates
            .iter()
            .copied()
            .find(|&c| c != first)
            .unwrap_or(first);

        let away = -normalize(vector(first, second))?;
        let style = self.style();
        ops.push(DrawOp::SetFillStyle(style.stroke_color));
        ops.push(DrawOp::FillCircle {
            center: first + away * style.start_marker_offset,
            radius: style.start_marker_radius,
        });
        Ok(())
    }

    fn push_main_path(&self, ops: &mut Vec<DrawOp>) {
        ops.push(DrawOp::SetStrokeStyle(self.style().path_stroke()));
        ops.push(DrawOp::BeginPath);
        for (i, digit) in collapse_adjacent_duplicates(self.digits()).into_iter().enumerate() {
            let point = coordinate_of(digit, self.region());
            ops.push(if i == 0 {
                DrawOp::MoveTo(point)
            } else {
                DrawOp::LineTo(point)
            });
        }
        ops.push(DrawOp::Stroke);
    }

    /// Cross-tick on digits the path passes straight through
    fn push_same_direction_ticks(&self, ops: &mut Vec<DrawOp>) -> Result<(), GlyphError> {
        let digits = self.digits();
        let directions = self.directions();
        let coordinates = self.coordinates();
        let half_length = self.style().tick_half_length;

        let mut styled = false;
        for i in 1..digits.len() {
            if !directions[i].is_same(directions[i - 1]) || digits[i] == digits[i - 1] {
                continue;
            }
            // A repeated non-zero direction always has a following digit
            let Some(&next) = coordinates.get(i + 1) else {
                continue;
            };
            let center = coordinates[i];
            let normal = unit_normal(center, next)?;

            if !styled {
                ops.push(DrawOp::SetStrokeStyle(self.style().tick_stroke()));
                styled = true;
            }
            ops.push(DrawOp::BeginPath);
            ops.push(DrawOp::MoveTo(center + normal * half_length));
            ops.push(DrawOp::LineTo(center - normal * half_length));
            ops.push(DrawOp::Stroke);
        }
        Ok(())
    }

    /// Circle per run; a horizontal bar from 3 repeats, a vertical one from 4
    fn push_run_markers(&self, ops: &mut Vec<DrawOp>) {
        let runs = self.runs();
        if runs.is_empty() {
            return;
        }

        let radius = self.style().run_circle_radius;
        ops.push(DrawOp::SetStrokeStyle(self.style().path_stroke()));
        for run in runs {
            let center = coordinate_of(run.digit, self.region());
            ops.push(DrawOp::StrokeCircle { center, radius });

            if run.occurrence >= 2 {
                push_segment(
                    ops,
                    center - Vec2::new(radius, 0.0),
                    center + Vec2::new(radius, 0.0),
                );
            }
            if run.occurrence >= 3 {
                push_segment(
                    ops,
                    center - Vec2::new(0.0, radius),
                    center + Vec2::new(0.0, radius),
                );
            }
        }
    }

    /// Shifted copy of every interior segment heading opposite to an earlier one
    fn push_crossing_offsets(&self, ops: &mut Vec<DrawOp>) {
        let directions = self.directions();
        let coordinates = self.coordinates();
        let amount = self.style().crossing_offset;

        let mut styled = false;
        for i in 1..directions.len().saturating_sub(1) {
            let direction = directions[i];
            // Stalls on a repeated digit are not segments
            if direction.is_zero() {
                continue;
            }
            if !directions[..i].iter().any(|&earlier| direction.is_opposite(earlier)) {
                continue;
            }

            let offset = if direction.y != 0 {
                Vec2::new(amount * f64::from(direction.y), 0.0)
            } else {
                Vec2::new(0.0, -amount * f64::from(direction.x))
            };

            if !styled {
                ops.push(DrawOp::SetStrokeStyle(self.style().path_stroke()));
                styled = true;
            }
            push_segment(ops, coordinates[i] + offset, coordinates[i + 1] + offset);
        }
    }
}

fn push_segment(ops: &mut Vec<DrawOp>, from: Vec2, to: Vec2) {
    ops.push(DrawOp::BeginPath);
    ops.push(DrawOp::MoveTo(from));
    ops.push(DrawOp::LineTo(to));
    ops.push(DrawOp::Stroke);
}
