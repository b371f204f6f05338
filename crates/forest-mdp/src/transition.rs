//! Stochastic transition model.
//!
//! An intended action succeeds with probability `1 - error_rate`; the
//! remaining `error_rate` mass is spread uniformly over all four
//! directions (the intended one included). Each direction resolves to its
//! deterministic successor through [`Grid::successor`].

use forest_core::{Action, Coord};
use forest_world::Grid;

/// One possible outcome of an action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Where the agent ends up.
    pub next: Coord,
    /// Probability of this outcome.
    pub prob: f64,
}

/// Probability that intending `intended` actually executes `direction`.
pub fn action_weight(direction: Action, intended: Action, error_rate: f64) -> f64 {
    let slip = error_rate / 4.0;
    if direction == intended {
        slip + (1.0 - error_rate)
    } else {
        slip
    }
}

/// [`action_weight`] for every direction, in canonical order.
pub fn action_weights(intended: Action, error_rate: f64) -> [f64; Action::COUNT] {
    Action::ALL.map(|d| action_weight(d, intended, error_rate))
}

/// The four `(successor, probability)` outcomes of intending `intended`
/// at `state`, one per direction in canonical order.
///
/// Probabilities sum to 1. Outcomes that land on the same cell are kept
/// separate.
pub fn transitions(
    grid: &Grid,
    state: Coord,
    intended: Action,
    error_rate: f64,
) -> [Transition; Action::COUNT] {
    let succ = grid.successors(state);
    Action::ALL.map(|d| Transition {
        next: succ[d.index()],
        prob: action_weight(d, intended, error_rate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use forest_world::GridBuilder;
    use proptest::prelude::*;

    fn open_3x3() -> Grid {
        GridBuilder::new(3, 3).unwrap().build().unwrap()
    }

    #[test]
    fn deterministic_when_error_rate_zero() {
        let grid = open_3x3();
        let centre = Coord::new(1, 1);
        for a in Action::ALL {
            let ts = transitions(&grid, centre, a, 0.0);
            let certain: Vec<_> = ts.iter().filter(|t| t.prob == 1.0).collect();
            assert_eq!(certain.len(), 1);
            assert_eq!(certain[0].next, grid.successor(centre, a));
            assert_eq!(ts.iter().filter(|t| t.prob == 0.0).count(), 3);
        }
    }

    #[test]
    fn fully_random_when_error_rate_one() {
        let grid = open_3x3();
        let ts = transitions(&grid, Coord::new(0, 0), Action::Down, 1.0);
        assert!(ts.iter().all(|t| t.prob == 0.25));
    }

    #[test]
    fn duplicate_successors_not_merged() {
        // Corner: Up and Left both clamp back to the corner.
        let grid = open_3x3();
        let ts = transitions(&grid, Coord::new(0, 0), Action::Up, 0.4);
        assert_eq!(ts.len(), 4);
        assert_eq!(ts[0].next, Coord::new(0, 0));
        assert_eq!(ts[3].next, Coord::new(0, 0));
        assert!((ts[0].prob - 0.7).abs() < 1e-12);
        assert!((ts[3].prob - 0.1).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn probabilities_sum_to_one(er in 0.0f64..=1.0, a in 0usize..4) {
            let grid = open_3x3();
            let intended = Action::from_index(a).unwrap();
            let total: f64 = transitions(&grid, Coord::new(1, 1), intended, er)
                .iter()
                .map(|t| t.prob)
                .sum();
            prop_assert!((total - 1.0).abs() < 1e-12);
            prop_assert!(action_weights(intended, er).iter().all(|&w| w >= 0.0));
        }
    }
}
