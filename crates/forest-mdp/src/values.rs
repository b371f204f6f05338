//! Double-buffered value table.
//!
//! [`ValueTable`] holds two [`CellMap<f64>`] buffers. The *published*
//! buffer is what readers see and what the incremental RTDP update
//! mutates in place. A batch sweep reads the published buffer, writes the
//! *staging* buffer, then [`publish`](ValueTable::publish)es it with a
//! swap, so every cell of a sweep is computed from the same old table.

use forest_core::{CellMap, Coord};
use forest_world::Grid;
use std::mem;

/// Initial estimate for every non-goal cell.
pub const INITIAL_VALUE: f64 = -1.0;

/// Per-cell value estimates with a staging buffer for synchronous sweeps.
#[derive(Clone, Debug)]
pub struct ValueTable {
    published: CellMap<f64>,
    staging: CellMap<f64>,
}

impl ValueTable {
    /// Goals start at 0, everything else at [`INITIAL_VALUE`].
    pub fn new(grid: &Grid) -> Self {
        let published = CellMap::from_fn(grid.dims(), |c| {
            if grid.is_goal(c) {
                0.0
            } else {
                INITIAL_VALUE
            }
        });
        Self {
            staging: published.clone(),
            published,
        }
    }

    /// Current estimate for `coord`.
    pub fn get(&self, coord: Coord) -> f64 {
        self.published[coord]
    }

    /// Read-only view of the published table.
    pub fn published(&self) -> &CellMap<f64> {
        &self.published
    }

    /// Overwrite one published cell.
    pub(crate) fn set(&mut self, coord: Coord, value: f64) {
        self.published[coord] = value;
    }

    /// Borrow the published buffer for reading and the staging buffer for
    /// writing.
    pub(crate) fn split(&mut self) -> (&CellMap<f64>, &mut CellMap<f64>) {
        (&self.published, &mut self.staging)
    }

    /// Make the staging buffer the published one.
    pub(crate) fn publish(&mut self) {
        mem::swap(&mut self.published, &mut self.staging);
    }
}
