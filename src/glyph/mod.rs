//! Number glyphs
//!
//! A [`Glyph`] turns a short decimal number into a path traced over a
//! keypad grid, plus the marks that keep the trace unambiguous:
//!
//! ```text
//!   set_number("1234")
//!        │
//!        ▼
//!   digits ─► coordinates ─► directions ─► consecutive runs     (rebuild)
//!        │
//!        ▼
//!   render() ─► Vec<DrawOp> ─► Painter                          (draw)
//! ```
//!
//! Rebuilding happens eagerly on every `set_number`; drawing only reads.

pub mod digits;
pub mod grid;
pub mod render;
pub mod vector;

use log::debug;

use crate::constants::DEFAULT_MAX_DIGITS;
use crate::error::GlyphError;
use crate::surface::{replay, Painter};

pub use digits::{collapse_adjacent_duplicates, consecutive_runs, split_digits, ConsecutiveRun};
pub use grid::{coordinate_of, direction_of, Region};
pub use render::GlyphStyle;
pub use vector::{lerp, normalize, perpendicular, sign, vector, Direction, Vec2};

/// Behaviour switches of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphOptions {
    /// Draw a faint dot at every grid cell
    pub display_help_circles: bool,
    /// Characters of the input kept before splitting into digits
    pub max_digits: usize,
}

impl Default for GlyphOptions {
    fn default() -> Self {
        Self {
            display_help_circles: false,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

/// One number drawn as a keypad trace inside its own region
#[derive(Debug, Clone)]
pub struct Glyph {
    region: Region,
    options: GlyphOptions,
    style: GlyphStyle,
    number: Option<String>,
    digits: Vec<u8>,
    coordinates: Vec<Vec2>,
    directions: Vec<Direction>,
    runs: Vec<ConsecutiveRun>,
}

impl Glyph {
    pub fn new(region: Region, options: GlyphOptions) -> Self {
        Self {
            region,
            options,
            style: GlyphStyle::default(),
            number: None,
            digits: Vec::new(),
            coordinates: Vec::new(),
            directions: Vec::new(),
            runs: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the number to display and re-derive all glyph geometry.
    ///
    /// Only the first `max_digits` characters are kept. A value without any
    /// decimal digit leaves the glyph unset.
    pub fn set_number(&mut self, value: &str) {
        let truncated: String = value.chars().take(self.options.max_digits).collect();
        self.number = Some(truncated);
        self.rebuild();
    }

    pub fn set_number_value(&mut self, value: u64) {
        self.set_number(&value.to_string());
    }

    /// The current (truncated) number, if one is set
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref().filter(|_| self.is_ready())
    }

    /// True once a number with at least one digit is set
    pub fn is_ready(&self) -> bool {
        !self.digits.is_empty()
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn options(&self) -> &GlyphOptions {
        &self.options
    }

    pub fn style(&self) -> &GlyphStyle {
        &self.style
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn coordinates(&self) -> &[Vec2] {
        &self.coordinates
    }

    /// `directions()[i]` is the move from `digits()[i]` to `digits()[i + 1]`;
    /// the last entry is always [`Direction::NONE`].
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn runs(&self) -> &[ConsecutiveRun] {
        &self.runs
    }

    /// Draw the glyph onto `painter`.
    ///
    /// The full display list is built before the first call reaches the
    /// painter, so a failing draw leaves the surface untouched.
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), GlyphError> {
        let ops = self.render()?;
        replay(&ops, painter);
        Ok(())
    }

    fn rebuild(&mut self) {
        let region = self.region;
        let number = self.number.as_deref().unwrap_or_default();

        self.digits = split_digits(number);
        self.coordinates = self
            .digits
            .iter()
            .map(|&digit| coordinate_of(digit, &region))
            .collect();
        self.directions = self
            .digits
            .windows(2)
            .map(|pair| direction_of(pair[0], pair[1], &region))
            .chain(self.digits.last().map(|_| Direction::NONE))
            .collect();
        self.runs = consecutive_runs(&self.digits);

        debug!(
            "Glyph rebuilt: digits={:?} runs={:?}",
            self.digits, self.runs
        );
    }
}
