//! Shortest-path search on 4-connected grids.
//!
//! The single entry point is [`find_path`], an A\* search guided by the
//! [`manhattan`] heuristic over any [`Grid`](gridpath_core::Grid). Every call
//! is independent: all bookkeeping is allocated for the query and dropped
//! when it returns, so concurrent calls may share one grid freely.
//!
//! | Result | Meaning |
//! |---|---|
//! | `Ok(Outcome::Found(path))` | shortest path, start to goal inclusive |
//! | `Ok(Outcome::Unreachable)` | no path exists; not an error |
//! | `Err(PathError::OutOfBounds { .. })` | start or goal outside the grid |

mod astar;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;

pub use astar::find_path;
pub use distance::manhattan;
pub use error::{Endpoint, PathError};
pub use neighbors::Neighbors;
pub use path::{Outcome, Path};
