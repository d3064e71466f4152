//! Glyph error type
//!
//! Both failure classes are contract violations: they surface to the caller
//! immediately and never default to a zero vector or NaN.

use thiserror::Error;

/// Broad class of a [`GlyphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The glyph is not in a state that allows the operation
    State,
    /// A geometric operation was given input outside its domain
    Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GlyphError {
    #[error("glyph cannot be drawn without setting a number first")]
    NumberNotSet,
    #[error("cannot normalize a zero vector")]
    ZeroVector,
    #[error("the zero direction has no perpendicular")]
    ZeroDirection,
}

impl GlyphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NumberNotSet => ErrorKind::State,
            Self::ZeroVector | Self::ZeroDirection => ErrorKind::Domain,
        }
    }
}
