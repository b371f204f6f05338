//! forest-tiles: solve grid worlds with value iteration and RTDP.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the forest sub-crates, and ships the `forest-tiles` binary.
//!
//! # Quick start
//!
//! ```rust
//! use forest::prelude::*;
//!
//! let grid = forest::world::loader::parse(
//!     "WORLD 3 4\n\
//!      BEGIN 2 0\n\
//!      GOAL 0 3\n\
//!      HWALL 1 0 2\n\
//!      WATER 2 3\n",
//! )
//! .unwrap();
//!
//! let mut mdp = Mdp::new(grid, MdpConfig::default()).unwrap();
//! mdp.run_sweeps(20, ());
//! let report = mdp.run_episode(());
//! assert_eq!(mdp.status(), EpisodeStatus::Reached);
//! assert!(report.moves >= 5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `forest-core` | Coordinates, dimensions, actions, `CellMap` |
//! | [`world`] | `forest-world` | Grid model, builder, world-file loader |
//! | [`mdp`] | `forest-mdp` | Transition model, value iteration, RTDP |
//! | [`render`] | `forest-render` | Terminal board and paced observer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, dimensions, actions and dense cell storage (`forest-core`).
pub use forest_core as types;

/// Grid model and world files (`forest-world`).
///
/// Build grids with [`world::GridBuilder`] or read them with
/// [`world::loader::load`].
pub use forest_world as world;

/// Solver (`forest-mdp`).
///
/// [`mdp::Mdp`] runs batch sweeps and RTDP episodes; plug in an
/// [`mdp::Observer`] to watch.
pub use forest_mdp as mdp;

/// Terminal rendering (`forest-render`).
pub use forest_render as render;

/// Common imports for typical forest-tiles usage.
///
/// ```rust
/// use forest::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use forest_core::{Action, CellMap, Coord, Dims};

    // World
    pub use forest_world::{Grid, GridBuilder, TileKind};

    // Errors
    pub use forest_core::CoordError;
    pub use forest_mdp::ConfigError;
    pub use forest_world::{GridError, LoadError};

    // Solver
    pub use forest_mdp::{
        EpisodeReport, EpisodeStatus, Mdp, MdpConfig, Observer, Sampler, SeededSampler,
        StepRecord, SweepMetrics, WorldView,
    };

    // Rendering
    pub use forest_render::{RenderConfig, TerminalObserver};
}
