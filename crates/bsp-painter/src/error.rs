//! Error types for fallible constructors and parsers.

use thiserror::Error;

/// Reasons a vertex list cannot form a [`Polygon`](crate::Polygon).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Fewer than three vertices were supplied.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// The first three vertices are collinear, so no plane can be derived.
    #[error("polygon is degenerate: first three vertices are collinear")]
    Degenerate,

    /// A vertex lies off the plane spanned by the first three vertices.
    #[error("vertex {index} is {distance} away from the polygon plane")]
    NotCoplanar { index: usize, distance: f64 },
}

/// Reasons a string cannot be parsed as a [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("color must have 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

/// Returned when a control name does not match any [`ControlAction`](crate::ControlAction).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown control action {0:?}")]
pub struct ParseControlError(pub String);
