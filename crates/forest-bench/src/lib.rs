//! Benchmark worlds for forest-tiles.
//!
//! - [`serpentine`]: `n × n` maze with every terrain kind and a portal
//!   shortcut, used by the sweep and episode benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use forest_world::{Grid, GridBuilder, GridError};

/// Smallest size [`serpentine`] accepts.
pub const MIN_SIZE: u32 = 8;

/// Build an `n × n` serpentine maze.
///
/// Rows `4k + 2` are walls with a single gap, alternating between the
/// right and left edge, so the path snakes down the grid. Rows `4k + 1`
/// hold a water band in the middle third, rows `4k + 3` a grass tuft every
/// fifth column, and the left half of row 0 is floor. A portal joins the
/// top-right corner to the left edge of the goal row.
///
/// Start is `(0, 0)`; the goal sits at the right end of the last row
/// divisible by 4.
pub fn serpentine(n: u32) -> Result<Grid, GridError> {
    let n = n.max(MIN_SIZE);
    let last = (n - 1) / 4 * 4;
    let mut b = GridBuilder::new(n, n)?;

    for row in (2..n).step_by(4) {
        let gap = if (row / 4) % 2 == 0 { n - 1 } else { 0 };
        for col in (0..n).filter(|&c| c != gap) {
            b = b.wall(row, col)?;
        }
    }
    for row in (1..n).step_by(4) {
        for col in n / 3..2 * n / 3 {
            b = b.water(row, col)?;
        }
    }
    for row in (3..n).step_by(4) {
        for col in (0..n).step_by(5) {
            b = b.grass(row, col)?;
        }
    }
    for col in 0..n / 2 {
        b = b.floor(0, col)?;
    }

    b.portal((0, n - 1), (last, 0))?
        .goal(last, n - 1)?
        .water_penalty(2.0)?
        .build()
}
