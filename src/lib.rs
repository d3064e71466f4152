//! numglyph - decimal numbers drawn as keypad-trace glyphs
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │         CLI / config (numglyph)          │
//! ├──────────────────────────────────────────┤
//! │  Glyph model  →  set_number → rebuild    │
//! │                          ↓               │
//! │  Path renderer →  Vec<DrawOp>            │
//! │                          ↓               │
//! │  Painter (recording / raster → PNG)      │
//! └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod constants;
pub mod drawing;
pub mod error;
pub mod glyph;
pub mod surface;
pub mod utils;

pub use error::{ErrorKind, GlyphError};
pub use glyph::{Glyph, GlyphOptions, GlyphStyle, Region};
pub use surface::{DrawOp, Painter, RasterPainter, RecordingPainter};
