//! Errors raised while building grids.

use std::fmt;

use crate::geom::Cell;

/// Errors that can occur when constructing or parsing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    InvalidDimensions { rows: i32, cols: i32 },
    /// An ASCII map contained no rows.
    Empty,
    /// An ASCII map row has a different width from the first row.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.` or `#` was found in an ASCII map.
    InvalidRune { ch: char, cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::Empty => write!(f, "map is empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, cell } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = GridError::InvalidDimensions { rows: 0, cols: 4 };
        assert_eq!(e.to_string(), "grid dimensions must be positive, got 0x4");
        let e = GridError::InvalidRune {
            ch: 'x',
            cell: Cell::new(1, 2),
        };
        assert!(e.to_string().contains("at (1, 2)"));
    }
}
