//! Core types for the forest-tiles grid MDP.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace:
//! bounds-checked coordinates, grid dimensions, the four movement
//! actions, and [`CellMap`], the dense per-cell storage shared by the
//! tile map and the value table.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod cell_map;
pub mod error;
pub mod id;

pub use action::Action;
pub use cell_map::CellMap;
pub use error::CoordError;
pub use id::{Coord, Dims};
