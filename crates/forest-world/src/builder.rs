//! Validating builder for [`Grid`].

use crate::cell::{Category, Cell, Feature, PortalEnd};
use crate::error::GridError;
use crate::grid::Grid;
use forest_core::{CellMap, Coord, Dims};
use indexmap::IndexSet;
use tracing::warn;

/// Builder for [`Grid`].
///
/// Placement rules, checked on every call:
/// - coordinates must lie inside the grid;
/// - walls, goals and portal endpoints never share a cell with any other
///   category (re-declaring the same wall or goal is accepted);
/// - in [`strict`](GridBuilder::strict) mode, terrain categories are
///   exclusive too: a cell keeps the first category it was given.
///
/// [`build`](GridBuilder::build) additionally rejects a start cell inside
/// a wall.
///
/// # Examples
///
/// ```
/// use forest_world::GridBuilder;
///
/// let grid = GridBuilder::new(1, 3)?
///     .goal(0, 2)?
///     .start(0, 0)?
///     .build()?;
/// assert_eq!(grid.goals().count(), 1);
/// # Ok::<(), forest_world::GridError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GridBuilder {
    cells: CellMap<Cell>,
    goals: IndexSet<Coord>,
    portal_pairs: u32,
    water_penalty: f64,
    start: Coord,
    strict: bool,
}

impl GridBuilder {
    /// Default extra cost of leaving water.
    pub const DEFAULT_WATER_PENALTY: f64 = 1.0;

    /// Start an empty `rows × cols` grid with start `(0, 0)`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols)?;
        Ok(Self {
            cells: CellMap::filled(dims, Cell::default()),
            goals: IndexSet::new(),
            portal_pairs: 0,
            water_penalty: Self::DEFAULT_WATER_PENALTY,
            start: Coord::new(0, 0),
            strict: false,
        })
    }

    /// Make every category exclusive (one category per cell).
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        self.cells.dims()
    }

    /// Place `category` at `(row, col)`.
    ///
    /// Portals are paired and cannot be placed singly; use
    /// [`portal`](Self::portal).
    pub fn place(mut self, category: Category, row: u32, col: u32) -> Result<Self, GridError> {
        let coord = self.dims().coord(row, col)?;
        if category == Category::Portal {
            return Err(GridError::UnpairedPortal { coord });
        }
        self.claim(coord, category)?;
        let cell = &mut self.cells[coord];
        match category {
            Category::Wall => cell.feature = Feature::Wall,
            Category::Goal => {
                cell.feature = Feature::Goal;
                self.goals.insert(coord);
            }
            Category::Water => cell.terrain.water = true,
            Category::Grass => cell.terrain.grass = true,
            Category::Floor => cell.terrain.floor = true,
            Category::Portal => {}
        }
        Ok(self)
    }

    /// Place a wall.
    pub fn wall(self, row: u32, col: u32) -> Result<Self, GridError> {
        self.place(Category::Wall, row, col)
    }

    /// Place a goal.
    pub fn goal(self, row: u32, col: u32) -> Result<Self, GridError> {
        self.place(Category::Goal, row, col)
    }

    /// Mark a cell as water.
    pub fn water(self, row: u32, col: u32) -> Result<Self, GridError> {
        self.place(Category::Water, row, col)
    }

    /// Mark a cell as grass.
    pub fn grass(self, row: u32, col: u32) -> Result<Self, GridError> {
        self.place(Category::Grass, row, col)
    }

    /// Mark a cell as floor.
    pub fn floor(self, row: u32, col: u32) -> Result<Self, GridError> {
        self.place(Category::Floor, row, col)
    }

    /// Connect two cells with a portal pair. Pairs are indexed 0, 1, 2, ...
    /// in the order they are declared.
    pub fn portal(mut self, a: (u32, u32), b: (u32, u32)) -> Result<Self, GridError> {
        let a = self.dims().coord(a.0, a.1)?;
        let b = self.dims().coord(b.0, b.1)?;
        if a == b {
            return Err(GridError::PortalSelfLoop { coord: a });
        }
        self.claim(a, Category::Portal)?;
        self.claim(b, Category::Portal)?;
        let index = self.portal_pairs;
        self.cells[a].feature = Feature::Portal(PortalEnd { target: b, index });
        self.cells[b].feature = Feature::Portal(PortalEnd { target: a, index });
        self.portal_pairs += 1;
        Ok(self)
    }

    /// Set the start cell. Wall overlap is checked in [`build`](Self::build)
    /// because walls may be declared after the start.
    pub fn start(mut self, row: u32, col: u32) -> Result<Self, GridError> {
        self.start = self.dims().coord(row, col)?;
        Ok(self)
    }

    /// Set the water penalty. Values below 1.0 are raised to 1.0.
    pub fn water_penalty(mut self, penalty: f64) -> Result<Self, GridError> {
        if !penalty.is_finite() {
            return Err(GridError::InvalidWaterPenalty { value: penalty });
        }
        if penalty < Self::DEFAULT_WATER_PENALTY {
            warn!(penalty, "water penalty below 1.0, clamping");
        }
        self.water_penalty = penalty.max(Self::DEFAULT_WATER_PENALTY);
        Ok(self)
    }

    /// Validate and produce the grid.
    pub fn build(self) -> Result<Grid, GridError> {
        if self.cells[self.start].is_wall() {
            return Err(GridError::StartOnWall { coord: self.start });
        }
        Ok(Grid {
            cells: self.cells,
            goals: self.goals,
            portal_pairs: self.portal_pairs,
            water_penalty: self.water_penalty,
            start: self.start,
        })
    }

    /// Check that `coord` may take `requested`.
    fn claim(&self, coord: Coord, requested: Category) -> Result<(), GridError> {
        let cell = &self.cells[coord];
        let Some(existing) = cell.primary_category() else {
            return Ok(());
        };
        let conflict = GridError::Conflict {
            coord,
            existing,
            requested,
        };
        // Portal endpoints are never re-declarable.
        if requested == Category::Portal {
            return Err(conflict);
        }
        if cell.has(requested) {
            return Ok(());
        }
        if self.strict || requested.is_exclusive() || existing.is_exclusive() {
            return Err(conflict);
        }
        Ok(())
    }
}
