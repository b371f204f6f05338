//! Grid world model for forest-tiles.
//!
//! A [`Grid`] is an immutable description of an `M × N` world: walls,
//! goals, paired portals, and the water / grass / floor terrain that
//! decides what leaving a cell costs. Grids are assembled with
//! [`GridBuilder`], which enforces placement rules once, or read from
//! the line-oriented world format by [`loader`].
//!
//! The grid also owns the deterministic movement geometry
//! ([`Grid::successor`]): clamped shift, wall blocking, then portal
//! teleportation. Everything probabilistic lives in `forest-mdp`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod cell;
pub mod error;
pub mod grid;
pub mod loader;

pub use builder::GridBuilder;
pub use cell::{Category, Cell, Feature, PortalEnd, Terrain, TileKind};
pub use error::{GridError, LoadError};
pub use grid::Grid;
