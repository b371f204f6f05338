//! The immutable grid world and its movement geometry.

use crate::cell::{Cell, PortalEnd, TileKind};
use forest_core::{Action, CellMap, Coord, Dims};
use indexmap::IndexSet;

/// Reward for leaving a plain, grass, portal or any other default cell.
pub const STEP_REWARD: f64 = -1.0;

/// Reward for leaving a floor cell.
pub const FLOOR_REWARD: f64 = -0.05;

/// A fully validated grid world.
///
/// Built once by [`GridBuilder`](crate::GridBuilder) (directly or through
/// the [`loader`](crate::loader)) and never mutated afterwards. All
/// queries are pure lookups.
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) cells: CellMap<Cell>,
    pub(crate) goals: IndexSet<Coord>,
    pub(crate) portal_pairs: u32,
    pub(crate) water_penalty: f64,
    pub(crate) start: Coord,
}

impl Grid {
    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        self.cells.dims()
    }

    /// Number of rows (M).
    pub fn rows(&self) -> u32 {
        self.dims().rows()
    }

    /// Number of columns (N).
    pub fn cols(&self) -> u32 {
        self.dims().cols()
    }

    /// Category state of `coord`.
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord]
    }

    /// The full tile map.
    pub fn cells(&self) -> &CellMap<Cell> {
        &self.cells
    }

    /// Priority-resolved display category of `coord`.
    pub fn kind(&self, coord: Coord) -> TileKind {
        self.cells[coord].kind()
    }

    /// Whether `coord` is a wall.
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.cells[coord].is_wall()
    }

    /// Whether `coord` is a goal.
    pub fn is_goal(&self, coord: Coord) -> bool {
        self.cells[coord].is_goal()
    }

    /// Whether `coord` is grass.
    pub fn is_grass(&self, coord: Coord) -> bool {
        self.cells[coord].terrain.grass
    }

    /// Whether `coord` is water.
    pub fn is_water(&self, coord: Coord) -> bool {
        self.cells[coord].terrain.water
    }

    /// Whether `coord` is floor.
    pub fn is_floor(&self, coord: Coord) -> bool {
        self.cells[coord].terrain.floor
    }

    /// Portal endpoint data for `coord`, if it is one.
    pub fn portal(&self, coord: Coord) -> Option<PortalEnd> {
        self.cells[coord].portal()
    }

    /// Goal cells in declaration order.
    pub fn goals(&self) -> impl Iterator<Item = Coord> + '_ {
        self.goals.iter().copied()
    }

    /// Number of portal pairs.
    pub fn portal_pairs(&self) -> u32 {
        self.portal_pairs
    }

    /// Every portal endpoint with its data, in row-major order.
    pub fn portals(&self) -> impl Iterator<Item = (Coord, PortalEnd)> + '_ {
        self.cells.iter().filter_map(|(c, cell)| cell.portal().map(|p| (c, p)))
    }

    /// Extra cost for leaving water (always `>= 1.0`).
    pub fn water_penalty(&self) -> f64 {
        self.water_penalty
    }

    /// Start cell of every episode.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Cost model: reward received for *leaving* `state`.
    ///
    /// Checked in order water, floor, default, so a cell that is both
    /// water and floor is charged as water.
    pub fn reward_of(&self, state: Coord) -> f64 {
        let terrain = self.cells[state].terrain;
        if terrain.water {
            -(1.0 + self.water_penalty)
        } else if terrain.floor {
            FLOOR_REWARD
        } else {
            STEP_REWARD
        }
    }

    /// The paired coordinate if `state` is a portal endpoint, else `state`.
    pub fn portal_target(&self, state: Coord) -> Coord {
        self.portal(state).map_or(state, |p| p.target)
    }

    /// Deterministic result of moving from `state` in `action`'s direction.
    ///
    /// 1. shift one step, clamped to the grid;
    /// 2. a wall sends the agent back to `state`;
    /// 3. landing on a portal endpoint teleports to its pair.
    ///
    /// The result is never a wall.
    pub fn successor(&self, state: Coord, action: Action) -> Coord {
        let shifted = self.dims().shift(state, action);
        let landed = if self.is_wall(shifted) { state } else { shifted };
        self.portal_target(landed)
    }

    /// [`successor`](Self::successor) for every action, in canonical order.
    pub fn successors(&self, state: Coord) -> [Coord; Action::COUNT] {
        Action::ALL.map(|a| self.successor(state, a))
    }
}

#[cfg(test)]
mod tests {
    use crate::GridBuilder;
    use forest_core::{Action, Coord};

    fn c(r: u32, col: u32) -> Coord {
        Coord::new(r, col)
    }

    #[test]
    fn rewards_by_terrain() {
        let grid = GridBuilder::new(1, 4)
            .unwrap()
            .water(0, 0)
            .unwrap()
            .floor(0, 1)
            .unwrap()
            .grass(0, 2)
            .unwrap()
            .water_penalty(2.0)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(grid.reward_of(c(0, 0)), -3.0);
        assert_eq!(grid.reward_of(c(0, 1)), -0.05);
        assert_eq!(grid.reward_of(c(0, 2)), -1.0);
        assert_eq!(grid.reward_of(c(0, 3)), -1.0);
    }

    #[test]
    fn overlapping_terrain_rewards_water_first() {
        let grid = GridBuilder::new(1, 2)
            .unwrap()
            .floor(0, 0)
            .unwrap()
            .water(0, 0)
            .unwrap()
            .grass(0, 1)
            .unwrap()
            .floor(0, 1)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(grid.reward_of(c(0, 0)), -2.0);
        assert_eq!(grid.reward_of(c(0, 1)), -0.05);
    }

    #[test]
    fn successor_blocked_by_wall() {
        let grid = GridBuilder::new(3, 3)
            .unwrap()
            .wall(0, 1)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(grid.successor(c(0, 0), Action::Right), c(0, 0));
        assert_eq!(grid.successor(c(0, 0), Action::Down), c(1, 0));
        assert_eq!(grid.successor(c(1, 1), Action::Up), c(1, 1));
    }

    #[test]
    fn successor_clamps_at_boundary() {
        let grid = GridBuilder::new(2, 2).unwrap().build().unwrap();
        assert_eq!(grid.successor(c(0, 0), Action::Up), c(0, 0));
        assert_eq!(grid.successor(c(1, 1), Action::Right), c(1, 1));
    }

    #[test]
    fn successor_teleports_through_portal() {
        let grid = GridBuilder::new(3, 3)
            .unwrap()
            .portal((0, 1), (2, 2))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(grid.successor(c(0, 0), Action::Right), c(2, 2));
        assert_eq!(grid.successor(c(2, 1), Action::Right), c(0, 1));
        assert_eq!(grid.portal_target(c(1, 1)), c(1, 1));
    }

    #[test]
    fn successors_in_canonical_order() {
        let grid = GridBuilder::new(3, 3).unwrap().build().unwrap();
        assert_eq!(
            grid.successors(c(1, 1)),
            [c(0, 1), c(1, 2), c(2, 1), c(1, 0)]
        );
    }
}
