//! Error types for coordinate and dimension handling.

use crate::id::{Coord, Dims};
use std::error::Error;
use std::fmt;

/// Errors arising from grid dimensions or bounds-checked coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoordError {
    /// A coordinate is outside the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Dimensions it was checked against.
        dims: Dims,
    },
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The value supplied.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, dims } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: [0, {}) x [0, {})",
                    dims.rows(),
                    dims.cols()
                )
            }
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for CoordError {}
