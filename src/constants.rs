//! Global constants for numglyph
//!
//! Consolidates grid, styling, and rasterization constants
//! to eliminate magic numbers throughout the codebase.

// ============================================================================
// Grid Constants
// ============================================================================

/// Columns of the keypad grid
pub const GRID_COLUMNS: f64 = 3.0;

/// Rows of the keypad grid (3 rows for 1-9, one row for 0)
pub const GRID_ROWS: f64 = 4.0;

/// Default truncation length for the digit sequence
pub const DEFAULT_MAX_DIGITS: usize = 4;

// ============================================================================
// Glyph Style Constants
// ============================================================================

/// Path color ("indianred")
pub const STROKE_COLOR: &str = "cd5c5c";

/// Path stroke width (pixels)
pub const LINE_WIDTH: f64 = 5.0;

/// Help circle fill: rgba(191, 191, 191, 0.1)
pub const HELP_CIRCLE_COLOR: &str = "bfbfbf1a";

/// Help circle radius (pixels)
pub const HELP_CIRCLE_RADIUS: f64 = 10.0;

/// Half-length of a same-direction tick (pixels)
pub const TICK_HALF_LENGTH: f64 = 10.0;

/// Radius of the circle marking a run of repeated digits
pub const RUN_CIRCLE_RADIUS: f64 = 15.0;

/// Radius of the start marker dot
pub const START_MARKER_RADIUS: f64 = 5.0;

/// Distance of the start marker from the first digit
pub const START_MARKER_OFFSET: f64 = 10.0;

/// Sideways shift of a segment that doubles back over an earlier one
pub const CROSSING_OFFSET: f64 = 10.0;

// ============================================================================
// Canvas Constants
// ============================================================================

/// Default glyph width (pixels)
pub const GLYPH_WIDTH: u32 = 300;

/// Default glyph height (pixels)
pub const GLYPH_HEIGHT: u32 = 400;

/// Horizontal gap between glyphs on a shared canvas
pub const GLYPH_GAP: u32 = 20;

/// Border around the glyph row
pub const CANVAS_PADDING: u32 = 10;

/// Canvas background color
pub const BACKGROUND_COLOR: &str = "ffffff";

/// Largest canvas side accepted by the CLI (pixels)
pub const MAX_CANVAS_SIDE: u32 = 16384;

/// Default PNG output path
pub const OUTPUT_PATH: &str = "glyph.png";

// ============================================================================
// Rasterization Constants
// ============================================================================

/// Anti-aliasing width for strokes and fills (pixels)
pub const AA_WIDTH: f32 = 1.0;

/// Alpha threshold for rendering pixels (below this = skip)
pub const ALPHA_THRESHOLD: f32 = 0.01;
