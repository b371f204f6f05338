//! Hooks for watching the engine work.

use crate::metrics::{EpisodeReport, StepRecord, SweepMetrics};
use forest_core::{CellMap, Coord};
use forest_world::Grid;

/// Read-only snapshot handed to observers.
#[derive(Clone, Copy, Debug)]
pub struct WorldView<'a> {
    /// The world being solved.
    pub grid: &'a Grid,
    /// Current value estimates.
    pub values: &'a CellMap<f64>,
    /// Agent position, when an episode is in progress.
    pub agent: Option<Coord>,
}

/// Callbacks fired by [`Mdp::run_sweeps`](crate::Mdp::run_sweeps) and
/// [`Mdp::run_episode`](crate::Mdp::run_episode). Every method defaults to
/// a no-op.
pub trait Observer {
    /// After sweep `iteration` (0-based) of `total`.
    fn on_sweep(
        &mut self,
        _view: &WorldView<'_>,
        _metrics: &SweepMetrics,
        _iteration: usize,
        _total: usize,
    ) {
    }

    /// Agent placed on the start cell, before the first move.
    fn on_episode_start(&mut self, _view: &WorldView<'_>) {}

    /// After each move. `cost_so_far` includes this move.
    fn on_step(&mut self, _view: &WorldView<'_>, _record: &StepRecord, _cost_so_far: f64) {}

    /// Agent reached a goal.
    fn on_episode_end(&mut self, _view: &WorldView<'_>, _report: &EpisodeReport) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_sweep(
        &mut self,
        view: &WorldView<'_>,
        metrics: &SweepMetrics,
        iteration: usize,
        total: usize,
    ) {
        (**self).on_sweep(view, metrics, iteration, total);
    }

    fn on_episode_start(&mut self, view: &WorldView<'_>) {
        (**self).on_episode_start(view);
    }

    fn on_step(&mut self, view: &WorldView<'_>, record: &StepRecord, cost_so_far: f64) {
        (**self).on_step(view, record, cost_so_far);
    }

    fn on_episode_end(&mut self, view: &WorldView<'_>, report: &EpisodeReport) {
        (**self).on_episode_end(view, report);
    }
}
