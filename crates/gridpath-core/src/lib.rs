//! **gridpath-core** — the grid model shared by the gridpath crates.
//!
//! This crate provides the leaf types every search is handed: the [`Cell`]
//! coordinate, the [`Bounds`] rectangle, the read-only [`Grid`] trait and two
//! implementations of it ([`OpenGrid`] and [`OccupancyGrid`]).

pub mod ascii;
pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Cell};
pub use grid::{Grid, OccupancyGrid, OpenGrid};
