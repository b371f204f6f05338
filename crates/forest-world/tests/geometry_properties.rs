use forest_core::{Action, Coord};
use forest_world::{loader, Category, Grid, GridBuilder};
use proptest::prelude::*;

/// Random grid: walls and terrain scattered, one portal pair if it fits.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (1u32..8, 1u32..8)
        .prop_flat_map(|(rows, cols)| {
            let cell = (0..rows, 0..cols, 0u8..5);
            (
                Just((rows, cols)),
                prop::collection::vec(cell, 0..20),
                (0..rows, 0..cols, 0..rows, 0..cols),
            )
        })
        .prop_map(|((rows, cols), placements, (pr, pc, qr, qc))| {
            let mut b = GridBuilder::new(rows, cols).unwrap();
            for (r, c, kind) in placements {
                let category = match kind {
                    0 => Category::Wall,
                    1 => Category::Water,
                    2 => Category::Grass,
                    3 => Category::Floor,
                    _ => Category::Goal,
                };
                // Conflicting placements are simply skipped.
                b = match b.clone().place(category, r, c) {
                    Ok(next) => next,
                    Err(_) => b,
                };
            }
            b = match b.clone().portal((pr, pc), (qr, qc)) {
                Ok(next) => next,
                Err(_) => b,
            };
            let start = b.dims().coords().find(|&c| {
                b.clone()
                    .start(c.row, c.col)
                    .and_then(|s| s.build())
                    .is_ok()
            });
            match start {
                Some(s) => b.start(s.row, s.col).unwrap().build().unwrap(),
                // Everything is a wall: fall back to an empty grid.
                None => GridBuilder::new(rows, cols).unwrap().build().unwrap(),
            }
        })
}

proptest! {
    #[test]
    fn successor_is_in_bounds_and_never_a_wall(grid in arb_grid()) {
        for state in grid.dims().coords() {
            if grid.is_wall(state) {
                continue;
            }
            for action in Action::ALL {
                let next = grid.successor(state, action);
                prop_assert!(grid.dims().contains(next));
                prop_assert!(!grid.is_wall(next), "{state} {action} -> wall {next}");
            }
        }
    }

    #[test]
    fn portals_are_symmetric(grid in arb_grid()) {
        for (coord, end) in grid.portals() {
            prop_assert_ne!(coord, end.target);
            let back = grid.portal(end.target).unwrap();
            prop_assert_eq!(back.target, coord);
            prop_assert_eq!(back.index, end.index);
        }
        prop_assert_eq!(grid.portals().count() as u32, grid.portal_pairs() * 2);
    }

    #[test]
    fn rewards_are_negative(grid in arb_grid()) {
        for state in grid.dims().coords() {
            prop_assert!(grid.reward_of(state) < 0.0);
        }
    }
}

// ── World files ─────────────────────────────────────────────────

#[test]
fn corridor_world_round_trips_through_loader() {
    let grid = loader::parse("WORLD 1 3\nGOAL 0 2\n").unwrap();
    assert_eq!(grid.start(), Coord::new(0, 0));
    assert_eq!(grid.successor(Coord::new(0, 0), Action::Right), Coord::new(0, 1));
    assert_eq!(grid.successor(Coord::new(0, 1), Action::Right), Coord::new(0, 2));
}

#[test]
fn load_from_disk() {
    let path = std::env::temp_dir().join(format!("forest-world-{}.txt", std::process::id()));
    std::fs::write(&path, "WORLD 2 2\nGOAL 1 1\nWATER 0 1\nPENALWATER 3\n").unwrap();
    let grid = loader::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(grid.is_goal(Coord::new(1, 1)));
    assert_eq!(grid.reward_of(Coord::new(0, 1)), -4.0);
}

#[test]
fn error_messages_name_the_line() {
    let err = loader::parse("WORLD 2 2\n\nWALL 0 0\nGOAL 0 0\n").unwrap_err();
    assert!(err.to_string().starts_with("line 4:"), "{err}");
}
