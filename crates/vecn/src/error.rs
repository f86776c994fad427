//! Error types for vector operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during vector operations.
///
/// Coordinate list length mismatch during construction is deliberately
/// NOT represented here: construction zero-pads short lists and
/// truncates long ones so that every vector is fully populated. That is
/// the only condition this crate resolves silently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// A checked `get`/`set` addressed an index past the last coordinate.
    OutOfRange {
        /// The requested coordinate index.
        index: usize,
        /// The vector's dimension.
        dim: usize,
    },
    /// An operation defined only for a specific dimension was invoked on
    /// a vector of another dimension (e.g. cross product off dimension 3).
    DimensionMismatch {
        /// The dimension the operation requires.
        expected: usize,
        /// The dimension of the operand.
        got: usize,
    },
    /// Text input could not be parsed into a vector.
    MalformedInput {
        /// What was wrong with the input.
        reason: String,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, dim } => {
                write!(f, "coordinate index {index} out of range for dimension {dim}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: operation requires {expected}, got {got}")
            }
            Self::MalformedInput { reason } => {
                write!(f, "malformed vector input: {reason}")
            }
        }
    }
}

impl Error for VecError {}
