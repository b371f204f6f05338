//! Grid coordinates and dimensions.

use crate::action::Action;
use crate::error::CoordError;
use std::fmt;

/// A cell position `(row, col)` on the grid.
///
/// `Coord` itself carries no bounds; coordinates that reach the engine
/// are produced by [`Dims::coord`] or by iterating a [`Dims`], so they
/// are always inside the grid they were created for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, `0 <= row < rows`.
    pub row: u32,
    /// Column index, `0 <= col < cols`.
    pub col: u32,
}

impl Coord {
    /// Create a coordinate without bounds checking.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Dimensions of a rectangular grid: `rows` × `cols`, both non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    rows: u32,
    cols: u32,
}

impl Dims {
    /// Maximum dimension size: flat indices must fit comfortably in `usize`
    /// and row/col arithmetic is done in `i64`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create dimensions for a `rows × cols` grid.
    ///
    /// Returns `Err(CoordError::EmptyGrid)` if either dimension is 0, or
    /// `Err(CoordError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use forest_core::Dims;
    ///
    /// let dims = Dims::new(3, 4).unwrap();
    /// assert_eq!(dims.cell_count(), 12);
    /// assert!(Dims::new(0, 4).is_err());
    /// ```
    pub fn new(rows: u32, cols: u32) -> Result<Self, CoordError> {
        if rows == 0 || cols == 0 {
            return Err(CoordError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(CoordError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(CoordError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows (M).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (N).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `coord` lies inside `[0, rows) × [0, cols)`.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Bounds-checked coordinate construction.
    pub fn coord(&self, row: u32, col: u32) -> Result<Coord, CoordError> {
        let coord = Coord::new(row, col);
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(CoordError::OutOfBounds { coord, dims: *self })
        }
    }

    /// Row-major flat index of an in-bounds coordinate.
    pub fn index(&self, coord: Coord) -> usize {
        (coord.row as usize) * (self.cols as usize) + coord.col as usize
    }

    /// Inverse of [`index`](Self::index).
    pub fn coord_at(&self, index: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((index / cols) as u32, (index % cols) as u32)
    }

    /// Row-major iteration: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }

    /// Move one step from `coord` in `action`'s direction.
    ///
    /// Out-of-range moves are clamped: at a boundary the shift is
    /// suppressed and `coord` is returned unchanged.
    pub fn shift(&self, coord: Coord, action: Action) -> Coord {
        let (dr, dc) = action.offset();
        Coord::new(
            clamp_axis(coord.row, dr, self.rows),
            clamp_axis(coord.col, dc, self.cols),
        )
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Apply an offset along one axis, clamping into `[0, len)`.
fn clamp_axis(val: u32, delta: i32, len: u32) -> u32 {
    let moved = i64::from(val) + i64::from(delta);
    moved.clamp(0, i64::from(len) - 1) as u32
}
