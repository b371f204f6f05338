//! Reusable fixture worlds.
//!
//! - [`corridor`]: 1×3, start (0,0), goal (0,2).
//! - [`water_step`]: 1×2, water start with penalty 2, goal (0,1).
//! - [`grass_pocket`]: a single grass cell with nowhere to go.
//! - [`portal_hop`]: 3×3 where a portal next to the start leads beside the goal.
//! - [`open_room`]: empty `rows × cols` with the goal in the far corner.
//! - [`forest`]: mixed-terrain world parsed from [`FOREST_WORLD`].

use forest_world::{loader, Grid, GridBuilder};

/// World file used by [`forest`].
pub const FOREST_WORLD: &str = "\
WORLD 8 10
BEGIN 7 0
GOAL 0 9
HWALL 2 0 6
VWALL 7 3 7
HWATER 5 1 4
VGRASS 9 3 6
HFLOOR 0 0 8
PENALWATER 3
PORTAL 6 6 1 8
";

pub fn corridor() -> Grid {
    GridBuilder::new(1, 3)
        .and_then(|b| b.goal(0, 2))
        .and_then(|b| b.build())
        .expect("corridor fixture")
}

pub fn water_step() -> Grid {
    GridBuilder::new(1, 2)
        .and_then(|b| b.water(0, 0))
        .and_then(|b| b.water_penalty(2.0))
        .and_then(|b| b.goal(0, 1))
        .and_then(|b| b.build())
        .expect("water fixture")
}

pub fn grass_pocket() -> Grid {
    GridBuilder::new(1, 1)
        .and_then(|b| b.grass(0, 0))
        .and_then(|b| b.build())
        .expect("grass fixture")
}

/// ```text
/// S P .
/// # # .
/// G . P
/// ```
pub fn portal_hop() -> Grid {
    GridBuilder::new(3, 3)
        .and_then(|b| b.wall(1, 0))
        .and_then(|b| b.wall(1, 1))
        .and_then(|b| b.portal((0, 1), (2, 2)))
        .and_then(|b| b.goal(2, 0))
        .and_then(|b| b.build())
        .expect("portal fixture")
}

pub fn open_room(rows: u32, cols: u32) -> Grid {
    GridBuilder::new(rows, cols)
        .and_then(|b| b.goal(rows - 1, cols - 1))
        .and_then(|b| b.build())
        .expect("open room fixture")
}

pub fn forest() -> Grid {
    loader::parse(FOREST_WORLD).expect("forest fixture")
}
