//! Markov decision process solver for forest-tiles grid worlds.
//!
//! The agent moves Up, Right, Down or Left; with probability
//! `error_rate` the move is replaced by a uniformly random direction.
//! Leaving a cell costs according to its terrain (see
//! [`Grid::reward_of`](forest_world::Grid::reward_of)) and goals are
//! terminal with value zero.
//!
//! [`Mdp`] learns state values in two phases:
//!
//! 1. **Batch value iteration.** [`Mdp::sweep`] recomputes every cell from
//!    the previous table (max over actions, or the mean on grass).
//! 2. **RTDP.** [`Mdp::run_episode`] walks the agent greedily from the
//!    start cell to a goal, backing up each cell as it leaves it.
//!
//! All randomness (tie-breaking, grass moves, execution noise) goes through
//! a [`Sampler`], seeded by default so runs are reproducible.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bellman;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod observer;
pub mod sampler;
pub mod transition;
pub mod values;

pub use config::{ConfigError, MdpConfig};
pub use engine::{EpisodeStatus, Mdp};
pub use metrics::{EpisodeReport, StepRecord, SweepMetrics};
pub use observer::{Observer, WorldView};
pub use sampler::{Sampler, SeededSampler};
pub use transition::{transitions, Transition};
pub use values::ValueTable;
