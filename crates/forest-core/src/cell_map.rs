//! Dense row-major per-cell storage.

use crate::id::{Coord, Dims};
use std::ops::{Index, IndexMut};

/// A dense `rows × cols` array with one `T` per cell.
///
/// Both the tile map and the value table are `CellMap`s, so coordinate
/// indexing lives in one place. Indexing with a coordinate outside the
/// map's [`Dims`] is a programming error and panics; use
/// [`get`](CellMap::get) for a checked lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct CellMap<T> {
    dims: Dims,
    cells: Vec<T>,
}

impl<T: Clone> CellMap<T> {
    /// Create a map with every cell set to `value`.
    pub fn filled(dims: Dims, value: T) -> Self {
        Self {
            dims,
            cells: vec![value; dims.cell_count()],
        }
    }
}

impl<T> CellMap<T> {
    /// Create a map by evaluating `f` for every coordinate in row-major order.
    pub fn from_fn(dims: Dims, f: impl FnMut(Coord) -> T) -> Self {
        Self {
            dims,
            cells: dims.coords().map(f).collect(),
        }
    }

    /// Dimensions of the map.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Checked lookup.
    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.dims.contains(coord) {
            self.cells.get(self.dims.index(coord))
        } else {
            None
        }
    }

    /// Row-major view of the raw cells.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Iterate `(coord, &value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (dims.coord_at(i), v))
    }

    fn checked_index(&self, coord: Coord) -> usize {
        assert!(
            self.dims.contains(coord),
            "coordinate {coord} outside {} grid",
            self.dims
        );
        self.dims.index(coord)
    }
}

impl<T> Index<Coord> for CellMap<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.cells[self.checked_index(coord)]
    }
}

impl<T> IndexMut<Coord> for CellMap<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        let i = self.checked_index(coord);
        &mut self.cells[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_and_indexed() {
        let dims = Dims::new(2, 3).unwrap();
        let mut m = CellMap::filled(dims, -1.0f64);
        m[Coord::new(1, 2)] = 0.0;
        assert_eq!(m[Coord::new(1, 2)], 0.0);
        assert_eq!(m[Coord::new(0, 0)], -1.0);
        assert_eq!(m.as_slice().len(), 6);
        assert_eq!(m.as_slice(), &[-1.0, -1.0, -1.0, -1.0, -1.0, 0.0]);
    }

    #[test]
    fn from_fn_visits_row_major() {
        let dims = Dims::new(2, 2).unwrap();
        let m = CellMap::from_fn(dims, |c| c.row * 10 + c.col);
        assert_eq!(m.as_slice(), &[0, 1, 10, 11]);
        let pairs: Vec<(Coord, u32)> = m.iter().map(|(c, v)| (c, *v)).collect();
        assert_eq!(pairs[3], (Coord::new(1, 1), 11));
    }

    #[test]
    fn get_is_checked() {
        let dims = Dims::new(2, 2).unwrap();
        let m = CellMap::filled(dims, 0u8);
        assert!(m.get(Coord::new(1, 1)).is_some());
        assert!(m.get(Coord::new(0, 2)).is_none());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn index_out_of_bounds_panics() {
        let dims = Dims::new(2, 2).unwrap();
        let m = CellMap::filled(dims, 0u8);
        let _ = m[Coord::new(0, 2)];
    }
}
