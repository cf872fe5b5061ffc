//! Plain-text maps for [`OccupancyGrid`].
//!
//! Each line is a row; `.` is an open cell and `#` a blocked one. All rows
//! must have the same width. Surrounding blank lines are ignored, and
//! `Display` writes the same format back.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Bounds, Cell};
use crate::grid::{Grid, OccupancyGrid};

/// Character for an open cell.
pub const OPEN: char = '.';
/// Character for a blocked cell.
pub const BLOCKED: char = '#';

impl OccupancyGrid {
    /// Parse a map from text.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let s = s.trim_matches(|c: char| c == '\n' || c == '\r');
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let mut width: Option<usize> = None;
        let mut blocked = Vec::new();
        let mut rows = 0;

        for (row, line) in s.lines().enumerate() {
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    OPEN => blocked.push(false),
                    BLOCKED => blocked.push(true),
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            cell: Cell::new(row as i32, col as i32),
                        });
                    }
                }
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::InconsistentWidth {
                        line: row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = width.unwrap_or(0) as i32;
        if cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self::from_parts(Bounds::new(rows, cols), blocked))
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols() {
                let ch = if self.is_blocked(Cell::new(row, col)) {
                    BLOCKED
                } else {
                    OPEN
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLED: &str = "
....
###.
....
";

    #[test]
    fn parse_and_size() {
        let g = OccupancyGrid::from_ascii(WALLED).unwrap();
        assert_eq!(g.bounds(), Bounds::new(3, 4));
        assert!(g.is_blocked(Cell::new(1, 0)));
        assert!(g.is_blocked(Cell::new(1, 2)));
        assert!(!g.is_blocked(Cell::new(1, 3)));
        assert_eq!(g.blocked_count(), 3);
    }

    #[test]
    fn display_writes_same_format() {
        let g = OccupancyGrid::from_ascii(WALLED).unwrap();
        assert_eq!(g.to_string(), "....\n###.\n....");
        assert_eq!(OccupancyGrid::from_ascii(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn inconsistent_width() {
        let err = OccupancyGrid::from_ascii("...\n..\n").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_rune() {
        let err = OccupancyGrid::from_ascii("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidRune {
                ch: 'x',
                cell: Cell::new(1, 1)
            }
        );
    }

    #[test]
    fn empty_map() {
        assert_eq!(OccupancyGrid::from_ascii("\n\n"), Err(GridError::Empty));
        assert_eq!(OccupancyGrid::from_ascii(""), Err(GridError::Empty));
    }

    #[test]
    fn crlf_lines() {
        let g = OccupancyGrid::from_ascii("#.\r\n.#\r\n").unwrap();
        assert_eq!(g.bounds(), Bounds::new(2, 2));
        assert!(g.is_blocked(Cell::new(1, 1)));
    }
}
