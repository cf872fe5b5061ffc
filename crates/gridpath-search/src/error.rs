use std::fmt;

use gridpath_core::Cell;

/// Which end of a query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Precondition failures of [`find_path`](crate::find_path).
///
/// An unreachable goal is not an error; see
/// [`Outcome::Unreachable`](crate::Outcome::Unreachable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start or goal cell lies outside the `rows × cols` grid.
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        rows: i32,
        cols: i32,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                endpoint,
                cell,
                rows,
                cols,
            } => write!(
                f,
                "{endpoint} cell {cell} is outside the {rows}x{cols} grid"
            ),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message() {
        let e = PathError::OutOfBounds {
            endpoint: Endpoint::Goal,
            cell: Cell::new(10, -1),
            rows: 10,
            cols: 10,
        };
        assert_eq!(e.to_string(), "goal cell (10, -1) is outside the 10x10 grid");
    }
}
