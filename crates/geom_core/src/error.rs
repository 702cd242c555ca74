//! Error types for the checked geometry entry points
//!
//! The plain algebra and collision functions are total over IEEE-754 floats
//! and let NaN/Inf propagate. The `checked_*` / `try_*` variants surface the
//! same degenerate inputs as a [`GeometryError`] instead.

use thiserror::Error;

use crate::physics::collision::ShapeKind;

/// Axis label used when reporting per-axis problems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(label)
    }
}

/// Geometry-level errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A zero-length vector was normalized
    #[error("Cannot normalize a zero-length vector")]
    DegenerateVector,

    /// The homogeneous w component was zero during a projective transform
    #[error("Projective transform produced w = 0")]
    DegenerateProjection,

    /// The matrix determinant is zero
    #[error("Matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// An AABB has min > max on some axis
    #[error("Invalid AABB bounds: min > max on the {axis} axis")]
    InvalidBounds {
        /// Offending axis
        axis: Axis,
    },

    /// No intersection predicate exists for this shape pair
    #[error("No intersection test for {first:?} vs {second:?}")]
    UnsupportedPair {
        /// Kind of the first shape
        first: ShapeKind,
        /// Kind of the second shape
        second: ShapeKind,
    },
}

/// Result alias for checked geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
