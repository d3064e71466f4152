//! Geometric drawing utilities for the raster surface
//!
//! This module provides pixel coverage for the shapes a glyph is made of:
//! - Strokes with round or butt caps
//! - Filled circles (start marker, help grid)
//! - Circle outlines (run markers)
//!
//! Shapes are rendered procedurally from signed distances rather than
//! scan-converted polygons, so edges get smooth anti-aliasing.

pub mod geometry;

// Re-export commonly used functions
pub use geometry::{
    aa_alpha_from_distance, butt_segment_sdf, disc_sdf, distance_to_segment, ring_sdf, smoothstep,
};
