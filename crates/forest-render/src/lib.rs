//! Terminal rendering for forest-tiles.
//!
//! [`board`] turns a [`WorldView`](forest_mdp::WorldView) into a framed
//! text grid, two glyphs per cell, shaded by value so that better cells
//! are brighter. [`TerminalObserver`] plugs that into the engine's
//! observer hooks and paces the output for a human watching.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod terminal;

pub use board::{board, shade, tile, worst_value, Rgb, Tile};
pub use terminal::{RenderConfig, TerminalObserver};
