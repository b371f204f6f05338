//! Per-sweep and per-step reporting types.

use forest_core::{Action, Coord};

/// Measurements from one batch value-iteration sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepMetrics {
    /// 1-based sweep counter over the engine's lifetime.
    pub sweep: u64,
    /// Largest absolute change of any cell in this sweep.
    pub max_delta: f64,
    /// Number of cells recomputed (walls and goals excluded).
    pub updated_cells: usize,
    /// Wall-clock time for the sweep, in microseconds.
    pub elapsed_us: u64,
}

/// One RTDP move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    /// Cell the agent left.
    pub from: Coord,
    /// Cell the agent arrived at.
    pub to: Coord,
    /// Action picked by the greedy (or grass-random) policy.
    pub chosen: Action,
    /// Action actually executed after noise.
    pub executed: Action,
    /// Cost of leaving `from`, as a positive number.
    pub cost: f64,
}

/// Outcome of a full episode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EpisodeReport {
    /// Moves taken.
    pub moves: u64,
    /// Accumulated cost of all moves.
    pub total_cost: f64,
}
