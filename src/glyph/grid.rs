//! Keypad grid mapping
//!
//! A region is split into 3 columns × 4 rows. Digits 1-9 sit in the first
//! three rows laid out like a numeric keypad (7 8 9 on top, 1 2 3 at the
//! bottom); 0 sits alone in the middle column of the fourth row.
//!
//! ```text
//! ┌───┬───┬───┐
//! │ 7 │ 8 │ 9 │
//! ├───┼───┼───┤
//! │ 4 │ 5 │ 6 │
//! ├───┼───┼───┤
//! │ 1 │ 2 │ 3 │
//! ├───┼───┼───┤
//! │   │ 0 │   │
//! └───┴───┴───┘
//! ```

use super::vector::{lerp, Direction, Vec2};
use crate::constants::{GRID_COLUMNS, GRID_ROWS};

/// Placement and size of one glyph's drawing area (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub const fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    pub fn block_width(&self) -> f64 {
        self.width / GRID_COLUMNS
    }

    pub fn block_height(&self) -> f64 {
        self.height / GRID_ROWS
    }

    /// Centre of the cell at (`column`, `row`)
    pub fn cell_center(&self, column: f64, row: f64) -> Vec2 {
        let bw = self.block_width();
        let bh = self.block_height();
        Vec2::new(
            self.origin_x + bw * column + bw / 2.0,
            self.origin_y + bh * row + bh / 2.0,
        )
    }

    /// Centres of the nine keypad cells in row-major order, followed by the 0 cell
    pub fn cell_centers(&self) -> Vec<Vec2> {
        let mut centers: Vec<Vec2> = (0..9u8)
            .map(|i| self.cell_center(f64::from(i % 3), f64::from(i / 3)))
            .collect();
        centers.push(coordinate_of(0, self));
        centers
    }
}

/// Pixel coordinate of `digit` inside `region`.
///
/// Pure: the same digit and region always give the same point.
pub fn coordinate_of(digit: u8, region: &Region) -> Vec2 {
    if digit == 0 {
        return region.cell_center(1.0, 3.0);
    }

    let digit = f64::from(digit);
    let column = (digit - 1.0) % 3.0;
    // 1 maps to logical index 8 and 9 to 0, so 1 2 3 land on the bottom row
    let row = (lerp(digit, 1.0, 9.0, 8.0, 0.0) / 3.0).floor();
    region.cell_center(column, row)
}

/// Direction of travel from `from` to `to`
pub fn direction_of(from: u8, to: u8, region: &Region) -> Direction {
    Direction::from_delta(coordinate_of(to, region) - coordinate_of(from, region))
}
