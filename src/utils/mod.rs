//! Utility functions shared across numglyph
//!
//! Common helpers that don't fit in specialized modules.

pub mod color;

pub use color::{blend_over, parse_hex_color, Color};
