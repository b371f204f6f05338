//! Error types for grid construction and world-file loading.

use crate::cell::Category;
use forest_core::{Coord, CoordError};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors detected while assembling a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Bad dimensions or an out-of-range coordinate.
    Coord(CoordError),
    /// Two incompatible categories claim the same cell.
    Conflict {
        /// The contested cell.
        coord: Coord,
        /// The category already there.
        existing: Category,
        /// The category being placed.
        requested: Category,
    },
    /// Both ends of a portal pair are the same cell.
    PortalSelfLoop {
        /// The cell named twice.
        coord: Coord,
    },
    /// A portal endpoint was placed without its pair.
    UnpairedPortal {
        /// The lone endpoint.
        coord: Coord,
    },
    /// The start cell is a wall.
    StartOnWall {
        /// The start cell.
        coord: Coord,
    },
    /// Water penalty is NaN or infinite.
    InvalidWaterPenalty {
        /// The value supplied.
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coord(e) => write!(f, "{e}"),
            Self::Conflict {
                coord,
                existing,
                requested,
            } => write!(
                f,
                "cannot place {requested} at {coord}: cell already holds {existing}"
            ),
            Self::PortalSelfLoop { coord } => {
                write!(f, "portal at {coord} cannot lead to itself")
            }
            Self::UnpairedPortal { coord } => {
                write!(f, "portal at {coord} must be declared together with its pair")
            }
            Self::StartOnWall { coord } => write!(f, "start {coord} is inside a wall"),
            Self::InvalidWaterPenalty { value } => {
                write!(f, "water penalty must be finite, got {value}")
            }
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoordError> for GridError {
    fn from(e: CoordError) -> Self {
        Self::Coord(e)
    }
}

/// Errors from [`loader`](crate::loader). Line numbers are 1-based.
#[derive(Debug)]
pub enum LoadError {
    /// The world file could not be read.
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A line could not be parsed.
    Syntax {
        /// Offending line.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// A placement directive appeared before `WORLD`.
    BeforeWorld {
        /// Offending line.
        line: usize,
        /// The directive keyword.
        directive: String,
    },
    /// The file never declared `WORLD`.
    MissingWorld,
    /// A directive was well-formed but violates a grid rule.
    Grid {
        /// Offending line, or `None` for whole-file checks (start on wall).
        line: Option<usize>,
        /// The rule that was violated.
        source: GridError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Syntax { line, reason } => write!(f, "line {line}: {reason}"),
            Self::BeforeWorld { line, directive } => {
                write!(f, "line {line}: {directive} appears before WORLD")
            }
            Self::MissingWorld => write!(f, "world file has no WORLD declaration"),
            Self::Grid {
                line: Some(line),
                source,
            } => write!(f, "line {line}: {source}"),
            Self::Grid { line: None, source } => write!(f, "{source}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid { source, .. } => Some(source),
            _ => None,
        }
    }
}
