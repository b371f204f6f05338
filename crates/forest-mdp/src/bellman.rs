//! Bellman backups shared by the batch sweep and the RTDP update.

use crate::transition::{action_weight, transitions};
use forest_core::{Action, CellMap, Coord};
use forest_world::Grid;

/// Expected return of intending `action` at `state` under `values`.
pub fn q_value(
    grid: &Grid,
    values: &CellMap<f64>,
    state: Coord,
    action: Action,
    gamma: f64,
    error_rate: f64,
) -> f64 {
    let reward = grid.reward_of(state);
    transitions(grid, state, action, error_rate)
        .iter()
        .map(|t| t.prob * (reward + gamma * values[t.next]))
        .sum()
}

/// New value of `state`: the mean of its q-values on grass (the agent has
/// no control there), the max everywhere else.
///
/// Callers skip walls and goals.
pub fn backup(
    grid: &Grid,
    values: &CellMap<f64>,
    state: Coord,
    gamma: f64,
    error_rate: f64,
) -> f64 {
    let q = Action::ALL.map(|a| q_value(grid, values, state, a, gamma, error_rate));
    if grid.is_grass(state) {
        q.iter().sum::<f64>() / Action::COUNT as f64
    } else {
        q.into_iter().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// RTDP look-ahead: for each intended action, the probability-weighted
/// value of the four successor cells. Rewards are not included.
pub fn expected_values(
    grid: &Grid,
    values: &CellMap<f64>,
    state: Coord,
    error_rate: f64,
) -> [f64; Action::COUNT] {
    let succ_values = grid.successors(state).map(|s| values[s]);
    Action::ALL.map(|intended| {
        Action::ALL
            .iter()
            .map(|&d| succ_values[d.index()] * action_weight(d, intended, error_rate))
            .sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use forest_world::GridBuilder;

    #[test]
    fn grass_averages_over_actions() {
        // 1x2: grass at (0,0), goal at (0,1). Right reaches the goal,
        // everything else stays put.
        let grid = GridBuilder::new(1, 2)
            .unwrap()
            .grass(0, 0)
            .unwrap()
            .goal(0, 1)
            .unwrap()
            .build()
            .unwrap();
        let values = CellMap::from_fn(grid.dims(), |c| if grid.is_goal(c) { 0.0 } else { -4.0 });
        let v = backup(&grid, &values, Coord::new(0, 0), 1.0, 0.0);
        // Three actions give -1 + -4, one gives -1 + 0.
        assert_eq!(v, (-5.0 * 3.0 + -1.0) / 4.0);
    }

    #[test]
    fn non_grass_takes_max() {
        let grid = GridBuilder::new(1, 2).unwrap().goal(0, 1).unwrap().build().unwrap();
        let values = CellMap::from_fn(grid.dims(), |c| if grid.is_goal(c) { 0.0 } else { -4.0 });
        assert_eq!(backup(&grid, &values, Coord::new(0, 0), 1.0, 0.0), -1.0);
    }

    #[test]
    fn expected_values_mix_by_error_rate() {
        let grid = GridBuilder::new(1, 2).unwrap().goal(0, 1).unwrap().build().unwrap();
        let values = CellMap::from_fn(grid.dims(), |c| if grid.is_goal(c) { 0.0 } else { -1.0 });
        let ev = expected_values(&grid, &values, Coord::new(0, 0), 0.0);
        assert_eq!(ev, [-1.0, 0.0, -1.0, -1.0]);

        let ev = expected_values(&grid, &values, Coord::new(0, 0), 1.0);
        assert!(ev.iter().all(|&v| (v + 0.75).abs() < 1e-12));
    }
}
