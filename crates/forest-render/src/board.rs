//! Board layout and colouring.

use crossterm::style::{Color, Stylize};
use forest_core::Coord;
use forest_mdp::WorldView;
use forest_world::TileKind;

const SHADE_EXPONENT: f64 = 1.0 / 1.35;

const WALL: Rgb = Rgb(60, 37, 13);
const AGENT: Rgb = Rgb(255, 0, 0);
const GOAL: Rgb = Rgb(255, 255, 255);

/// 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb { r, g, b }
    }
}

/// What one cell looks like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Two-character glyph.
    pub glyph: String,
    /// Foreground colour.
    pub color: Rgb,
}

/// Reference value for shading: the lowest value over non-wall cells, or
/// 1.0 when that is zero.
///
/// This is not a plain minimum over the whole table. Wall cells keep their
/// initial estimate and are left out.
pub fn worst_value(view: &WorldView<'_>) -> f64 {
    let worst = view
        .values
        .iter()
        .filter(|(c, _)| !view.grid.is_wall(*c))
        .map(|(_, &v)| v)
        .fold(f64::INFINITY, f64::min);
    if worst == 0.0 || !worst.is_finite() {
        1.0
    } else {
        worst
    }
}

/// Brightness channel for `value`: 255 for the best cells, falling towards
/// 0 as `value` approaches `worst`.
pub fn shade(value: f64, worst: f64) -> u8 {
    let ratio = (value / worst).powf(SHADE_EXPONENT);
    // `as` saturates, and maps NaN to 0.
    (255.0 * (1.0 - ratio)).max(0.0) as u8
}

/// Glyph and colour of `coord`.
pub fn tile(view: &WorldView<'_>, coord: Coord, worst: f64) -> Tile {
    let kind = view.grid.kind(coord);
    let fixed = |glyph: &str, color| Tile {
        glyph: glyph.to_string(),
        color,
    };
    if view.agent == Some(coord) && kind != TileKind::Wall {
        return fixed("MM", AGENT);
    }
    let c = shade(view.values[coord], worst);
    match kind {
        TileKind::Wall => fixed("@@", WALL),
        TileKind::Goal => fixed("GG", GOAL),
        TileKind::Grass => fixed("WW", Rgb(c, 255, c)),
        TileKind::Water => fixed("~~", Rgb(c, c, 255)),
        TileKind::Floor => fixed("||", Rgb(c, c, c)),
        TileKind::Portal(index) => Tile {
            glyph: format!("{index:02}"),
            color: Rgb(c, 0, c),
        },
        TileKind::Plain => fixed("##", Rgb(c, c, c)),
    }
}

/// Framed board, one line per row, three columns per cell. With `color`
/// set, glyphs carry bold 24-bit ANSI styling.
pub fn board(view: &WorldView<'_>, color: bool) -> String {
    let dims = view.grid.dims();
    let worst = worst_value(view);
    let rule = "─".repeat(3 * dims.cols() as usize);

    let mut out = String::new();
    out.push('┌');
    out.push_str(&rule);
    out.push_str("┐\n");
    for row in 0..dims.rows() {
        out.push('│');
        for col in 0..dims.cols() {
            let t = tile(view, Coord::new(row, col), worst);
            let cell = if color {
                format!("{} ", t.glyph.as_str().with(t.color.into()).bold())
            } else {
                format!("{} ", t.glyph)
            };
            out.push_str(&cell);
        }
        out.push_str("│\n");
    }
    out.push('└');
    out.push_str(&rule);
    out.push_str("┘\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use forest_core::CellMap;
    use forest_test_utils::fixtures;
    use forest_world::GridBuilder;

    #[test]
    fn corridor_plain_board() {
        let grid = fixtures::corridor();
        let values = CellMap::from_fn(grid.dims(), |c| if grid.is_goal(c) { 0.0 } else { -1.0 });
        let view = WorldView {
            grid: &grid,
            values: &values,
            agent: Some(Coord::new(0, 0)),
        };
        assert_eq!(
            board(&view, false),
            "┌─────────┐\n│MM ## GG │\n└─────────┘\n"
        );
    }

    #[test]
    fn glyph_priorities() {
        let grid = GridBuilder::new(1, 6)
            .unwrap()
            .wall(0, 0)
            .unwrap()
            .water(0, 1)
            .unwrap()
            .grass(0, 1)
            .unwrap()
            .floor(0, 2)
            .unwrap()
            .water(0, 2)
            .unwrap()
            .portal((0, 3), (0, 4))
            .unwrap()
            .goal(0, 5)
            .unwrap()
            .build()
            .unwrap();
        let values = CellMap::filled(grid.dims(), -1.0);
        let view = WorldView {
            grid: &grid,
            values: &values,
            agent: Some(Coord::new(0, 5)),
        };
        let glyphs: Vec<String> = (0..6)
            .map(|c| tile(&view, Coord::new(0, c), -1.0).glyph)
            .collect();
        assert_eq!(glyphs, ["@@", "WW", "~~", "00", "00", "MM"]);
    }

    #[test]
    fn shading_runs_from_bright_to_dark() {
        assert_eq!(shade(0.0, -4.0), 255);
        assert_eq!(shade(-4.0, -4.0), 0);
        let mid = shade(-2.0, -4.0);
        assert!(mid > 0 && mid < 255);
        // 0.5^(1/1.35) ~= 0.5987 -> 255 * 0.4013 ~= 102.3
        assert_eq!(mid, 102);
    }

    #[test]
    fn worst_ignores_walls_and_avoids_zero() {
        let grid = GridBuilder::new(1, 2).unwrap().wall(0, 0).unwrap().goal(0, 1).unwrap();
        let grid = grid.build().unwrap();
        let values = CellMap::from_fn(grid.dims(), |c| if grid.is_wall(c) { -9.0 } else { 0.0 });
        let view = WorldView {
            grid: &grid,
            values: &values,
            agent: None,
        };
        assert_eq!(worst_value(&view), 1.0);
    }

    #[test]
    fn worst_is_lowest_open_cell_before_first_sweep() {
        let grid = GridBuilder::new(1, 3)
            .unwrap()
            .wall(0, 0)
            .unwrap()
            .goal(0, 2)
            .unwrap()
            .build()
            .unwrap();
        let values = CellMap::from_fn(grid.dims(), |c| match c.col {
            0 => -5.0,
            1 => -2.0,
            _ => 0.0,
        });
        let view = WorldView {
            grid: &grid,
            values: &values,
            agent: None,
        };
        assert_eq!(worst_value(&view), -2.0);
        assert_eq!(tile(&view, Coord::new(0, 1), -2.0).color, Rgb(0, 0, 0));
    }

    #[test]
    fn colored_board_contains_rgb_escape() {
        let grid = fixtures::corridor();
        let values = CellMap::filled(grid.dims(), -1.0);
        let view = WorldView {
            grid: &grid,
            values: &values,
            agent: None,
        };
        let out = board(&view, true);
        assert!(out.contains("38;2;255;255;255"), "{out:?}");
    }
}
