//! The solver: batch value iteration followed by an RTDP episode.

use crate::bellman::{backup, expected_values};
use crate::config::{ConfigError, MdpConfig};
use crate::metrics::{EpisodeReport, StepRecord, SweepMetrics};
use crate::observer::{Observer, WorldView};
use crate::sampler::{Sampler, SeededSampler};
use crate::transition::action_weights;
use crate::values::ValueTable;
use forest_core::{Action, Coord};
use forest_world::Grid;
use smallvec::SmallVec;
use std::time::Instant;
use tracing::{debug, info, trace};

const UNIFORM: [f64; Action::COUNT] = [1.0; Action::COUNT];

/// Where the RTDP agent stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodeStatus {
    /// No episode started yet.
    Idle,
    /// Agent is on a non-goal cell.
    Running,
    /// Agent is on a goal cell.
    Reached,
}

/// Grid MDP solver.
///
/// Owns the grid, the value table and the sampler. Values are refined by
/// [`sweep`](Self::sweep) (synchronous, every cell from the same old
/// table) and by RTDP [`step`](Self::step)s, which back up only the cell
/// the agent is leaving.
///
/// # Termination
///
/// An episode ends only when the agent reaches a goal. If no goal is
/// reachable from the start, [`run_episode`](Self::run_episode) does not
/// return.
///
/// # Examples
///
/// ```
/// use forest_mdp::{Mdp, MdpConfig};
/// use forest_world::GridBuilder;
///
/// let grid = GridBuilder::new(1, 3).unwrap().goal(0, 2).unwrap().build().unwrap();
/// let mut mdp = Mdp::new(grid, MdpConfig::default()).unwrap();
/// mdp.run_sweeps(3, ());
/// let report = mdp.run_episode(());
/// assert_eq!(report.moves, 2);
/// assert_eq!(report.total_cost, 2.0);
/// ```
#[derive(Debug)]
pub struct Mdp<S = SeededSampler> {
    grid: Grid,
    config: MdpConfig,
    values: ValueTable,
    sampler: S,
    agent: Option<Coord>,
    sweeps: u64,
}

impl Mdp<SeededSampler> {
    /// Create a solver drawing randomness from a [`SeededSampler`] seeded
    /// with `config.seed`.
    pub fn new(grid: Grid, config: MdpConfig) -> Result<Self, ConfigError> {
        let sampler = SeededSampler::new(config.seed);
        Self::with_sampler(grid, config, sampler)
    }
}

impl<S: Sampler> Mdp<S> {
    /// Create a solver with an explicit sampler.
    pub fn with_sampler(grid: Grid, config: MdpConfig, sampler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let values = ValueTable::new(&grid);
        Ok(Self {
            grid,
            config,
            values,
            sampler,
            agent: None,
            sweeps: 0,
        })
    }

    /// The world being solved.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Construction-time parameters.
    pub fn config(&self) -> &MdpConfig {
        &self.config
    }

    /// Current value estimates.
    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// The sampler, for inspection.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Agent position, once an episode has started.
    pub fn agent(&self) -> Option<Coord> {
        self.agent
    }

    /// Batch sweeps run so far.
    pub fn sweeps(&self) -> u64 {
        self.sweeps
    }

    /// Episode state.
    pub fn status(&self) -> EpisodeStatus {
        match self.agent {
            None => EpisodeStatus::Idle,
            Some(pos) if self.grid.is_goal(pos) => EpisodeStatus::Reached,
            Some(_) => EpisodeStatus::Running,
        }
    }

    /// Snapshot for observers and renderers.
    pub fn view(&self) -> WorldView<'_> {
        WorldView {
            grid: &self.grid,
            values: self.values.published(),
            agent: self.agent,
        }
    }

    // ── Value iteration ──────────────────────────────────────────

    /// One synchronous value-iteration sweep over every cell.
    ///
    /// Walls and goals carry their value over unchanged.
    pub fn sweep(&mut self) -> SweepMetrics {
        let started = Instant::now();
        let (gamma, error_rate) = (self.config.gamma, self.config.error_rate);
        let grid = &self.grid;
        let (old, new) = self.values.split();

        let mut max_delta = 0.0_f64;
        let mut updated_cells = 0;
        for state in grid.dims().coords() {
            let value = if grid.is_wall(state) || grid.is_goal(state) {
                old[state]
            } else {
                updated_cells += 1;
                backup(grid, old, state, gamma, error_rate)
            };
            max_delta = max_delta.max((value - old[state]).abs());
            new[state] = value;
        }
        self.values.publish();
        self.sweeps += 1;

        let metrics = SweepMetrics {
            sweep: self.sweeps,
            max_delta,
            updated_cells,
            elapsed_us: started.elapsed().as_micros() as u64,
        };
        debug!(
            sweep = metrics.sweep,
            max_delta = metrics.max_delta,
            updated_cells = metrics.updated_cells,
            elapsed_us = metrics.elapsed_us,
            "value iteration sweep"
        );
        metrics
    }

    /// Run `k` sweeps, notifying `observer` after each.
    pub fn run_sweeps<O: Observer>(&mut self, k: usize, mut observer: O) -> Vec<SweepMetrics> {
        let mut history = Vec::with_capacity(k);
        for i in 0..k {
            let metrics = self.sweep();
            observer.on_sweep(&self.view(), &metrics, i, k);
            history.push(metrics);
        }
        history
    }

    /// Back up a single cell in place, reading the live table. Walls and
    /// goals are left alone.
    pub fn update_cell(&mut self, state: Coord) {
        if self.grid.is_wall(state) || self.grid.is_goal(state) {
            return;
        }
        let value = backup(
            &self.grid,
            self.values.published(),
            state,
            self.config.gamma,
            self.config.error_rate,
        );
        self.values.set(state, value);
    }

    // ── RTDP ─────────────────────────────────────────────────────

    /// Put the agent on the start cell.
    pub fn begin_episode(&mut self) {
        self.agent = Some(self.grid.start());
    }

    /// Pick an action for `state` and draw the one actually executed.
    fn select(&mut self, state: Coord) -> (Action, Action) {
        let error_rate = self.config.error_rate;
        let chosen = if self.grid.is_grass(state) {
            Action::ALL[self.sampler.choose_weighted(&UNIFORM).min(Action::COUNT - 1)]
        } else {
            let expected = expected_values(&self.grid, self.values.published(), state, error_rate);
            let best = expected.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let ties: SmallVec<[Action; Action::COUNT]> = Action::ALL
                .into_iter()
                .filter(|a| expected[a.index()] == best)
                .collect();
            // Always drawn, even for a single candidate, so the sampler
            // sees the same call sequence regardless of ties.
            let pick = self.sampler.choose_weighted(&UNIFORM[..ties.len()]);
            ties[pick.min(ties.len() - 1)]
        };
        let weights = action_weights(chosen, error_rate);
        let executed = Action::ALL[self.sampler.choose_weighted(&weights).min(Action::COUNT - 1)];
        (chosen, executed)
    }

    /// One RTDP move.
    ///
    /// Starts an episode if none is running. Returns `None` once the agent
    /// stands on a goal.
    pub fn step(&mut self) -> Option<StepRecord> {
        let from = match self.agent {
            Some(pos) => pos,
            None => {
                self.begin_episode();
                self.grid.start()
            }
        };
        if self.grid.is_goal(from) {
            return None;
        }

        let successors = self.grid.successors(from);
        let (chosen, executed) = self.select(from);
        self.update_cell(from);
        let to = successors[executed.index()];
        self.agent = Some(to);

        let record = StepRecord {
            from,
            to,
            chosen,
            executed,
            cost: -self.grid.reward_of(from),
        };
        trace!(
            %from,
            %to,
            %chosen,
            %executed,
            cost = record.cost,
            value = self.values.get(from),
            "rtdp step"
        );
        Some(record)
    }

    /// Run an episode from the start cell until a goal is reached.
    pub fn run_episode<O: Observer>(&mut self, mut observer: O) -> EpisodeReport {
        self.begin_episode();
        observer.on_episode_start(&self.view());

        let mut report = EpisodeReport::default();
        while let Some(record) = self.step() {
            report.moves += 1;
            report.total_cost += record.cost;
            observer.on_step(&self.view(), &record, report.total_cost);
        }

        info!(
            moves = report.moves,
            total_cost = report.total_cost,
            "episode finished"
        );
        observer.on_episode_end(&self.view(), &report);
        report
    }
}
