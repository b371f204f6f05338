//! Per-cell categories.
//!
//! A cell has at most one exclusive [`Feature`] (wall, goal, portal
//! endpoint) plus a set of [`Terrain`] flags. Terrain flags may overlap;
//! consumers resolve overlaps through fixed priorities:
//!
//! - reward: water, then floor, then the default step cost
//! - display ([`Cell::kind`]): wall, goal, grass, water, floor, portal, plain

use forest_core::Coord;
use std::fmt;

/// One end of a portal pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PortalEnd {
    /// The paired coordinate; entering this cell lands the agent there.
    pub target: Coord,
    /// Index shared by both ends of the pair, in declaration order.
    pub index: u32,
}

/// Exclusive feature occupying a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feature {
    /// Nothing special.
    #[default]
    Open,
    /// Impassable; moves into a wall leave the agent in place.
    Wall,
    /// Terminal cell with a fixed value of zero.
    Goal,
    /// Portal endpoint.
    Portal(PortalEnd),
}

/// Terrain flags. Any combination is representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Terrain {
    /// Leaving costs `1 + water_penalty`.
    pub water: bool,
    /// Actions have no effect: values average over actions.
    pub grass: bool,
    /// Leaving costs only a small friction cost.
    pub floor: bool,
}

/// Full category state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Exclusive feature.
    pub feature: Feature,
    /// Terrain flags.
    pub terrain: Terrain,
}

impl Cell {
    /// Whether the cell is a wall.
    pub fn is_wall(&self) -> bool {
        self.feature == Feature::Wall
    }

    /// Whether the cell is a goal.
    pub fn is_goal(&self) -> bool {
        self.feature == Feature::Goal
    }

    /// Portal endpoint data, if any.
    pub fn portal(&self) -> Option<PortalEnd> {
        match self.feature {
            Feature::Portal(end) => Some(end),
            _ => None,
        }
    }

    /// Whether the cell already carries `category`.
    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::Wall => self.is_wall(),
            Category::Goal => self.is_goal(),
            Category::Portal => self.portal().is_some(),
            Category::Water => self.terrain.water,
            Category::Grass => self.terrain.grass,
            Category::Floor => self.terrain.floor,
        }
    }

    /// The first category this cell carries, in display priority order.
    pub fn primary_category(&self) -> Option<Category> {
        match self.kind() {
            TileKind::Wall => Some(Category::Wall),
            TileKind::Goal => Some(Category::Goal),
            TileKind::Grass => Some(Category::Grass),
            TileKind::Water => Some(Category::Water),
            TileKind::Floor => Some(Category::Floor),
            TileKind::Portal(_) => Some(Category::Portal),
            TileKind::Plain => None,
        }
    }

    /// Resolve the display category.
    pub fn kind(&self) -> TileKind {
        match self.feature {
            Feature::Wall => return TileKind::Wall,
            Feature::Goal => return TileKind::Goal,
            _ => {}
        }
        if self.terrain.grass {
            TileKind::Grass
        } else if self.terrain.water {
            TileKind::Water
        } else if self.terrain.floor {
            TileKind::Floor
        } else if let Feature::Portal(end) = self.feature {
            TileKind::Portal(end.index)
        } else {
            TileKind::Plain
        }
    }
}

/// Priority-resolved category of a cell, for renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    /// Wall.
    Wall,
    /// Goal.
    Goal,
    /// Grass (uncontrollable).
    Grass,
    /// Water.
    Water,
    /// Smooth floor.
    Floor,
    /// Portal endpoint with its pair index.
    Portal(u32),
    /// Ordinary traversable cell.
    Plain,
}

/// Placeable category, as named by builder calls and world-file directives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// `WALL` / `HWALL` / `VWALL`.
    Wall,
    /// `GOAL`.
    Goal,
    /// `WATER` / `HWATER` / `VWATER`.
    Water,
    /// `GRASS` / `HGRASS` / `VGRASS`.
    Grass,
    /// `FLOOR` / `HFLOOR` / `VFLOOR`.
    Floor,
    /// `PORTAL`.
    Portal,
}

impl Category {
    /// Walls, goals and portal endpoints cannot share a cell with anything.
    pub fn is_exclusive(self) -> bool {
        matches!(self, Category::Wall | Category::Goal | Category::Portal)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Wall => "wall",
            Category::Goal => "goal",
            Category::Water => "water",
            Category::Grass => "grass",
            Category::Floor => "floor",
            Category::Portal => "portal",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrain(water: bool, grass: bool, floor: bool) -> Cell {
        Cell {
            feature: Feature::Open,
            terrain: Terrain {
                water,
                grass,
                floor,
            },
        }
    }

    #[test]
    fn display_priority_grass_over_water_over_floor() {
        assert_eq!(terrain(true, true, true).kind(), TileKind::Grass);
        assert_eq!(terrain(true, false, true).kind(), TileKind::Water);
        assert_eq!(terrain(false, false, true).kind(), TileKind::Floor);
        assert_eq!(terrain(false, false, false).kind(), TileKind::Plain);
    }

    #[test]
    fn features_outrank_terrain() {
        let mut c = terrain(true, true, false);
        c.feature = Feature::Goal;
        assert_eq!(c.kind(), TileKind::Goal);
        c.feature = Feature::Wall;
        assert_eq!(c.kind(), TileKind::Wall);
    }

    #[test]
    fn portal_kind_carries_index() {
        let c = Cell {
            feature: Feature::Portal(PortalEnd {
                target: Coord::new(3, 4),
                index: 7,
            }),
            terrain: Terrain::default(),
        };
        assert_eq!(c.kind(), TileKind::Portal(7));
        assert_eq!(c.primary_category(), Some(Category::Portal));
    }

    #[test]
    fn default_cell_is_unclaimed_plain() {
        let c = Cell::default();
        assert_eq!(c.primary_category(), None);
        assert_eq!(c.kind(), TileKind::Plain);
    }
}
