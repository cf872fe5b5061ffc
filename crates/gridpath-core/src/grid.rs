//! The read-only [`Grid`] contract and its two implementations.
//!
//! A search only ever sees a grid through `&self`, so any number of searches
//! may share one grid across threads as long as nobody mutates it meanwhile.

use crate::error::GridError;
use crate::geom::{Bounds, Cell};

// ---------------------------------------------------------------------------
// Grid trait
// ---------------------------------------------------------------------------

/// A rectangular grid of traversable and blocked cells.
pub trait Grid {
    /// Number of rows. Positive for a well-formed grid.
    fn rows(&self) -> i32;

    /// Number of columns. Positive for a well-formed grid.
    fn cols(&self) -> i32;

    /// Whether `cell` is blocked. Must be pure; cells outside the grid may
    /// answer anything since callers check bounds first.
    fn is_blocked(&self, cell: Cell) -> bool;

    /// The grid rectangle.
    #[inline]
    fn bounds(&self) -> Bounds {
        Bounds::new(self.rows(), self.cols())
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    fn in_bounds(&self, cell: Cell) -> bool {
        self.bounds().contains(cell)
    }

    /// Whether `cell` is inside the grid and not blocked.
    #[inline]
    fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell)
    }
}

impl<G: Grid + ?Sized> Grid for &G {
    #[inline]
    fn rows(&self) -> i32 {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> i32 {
        (**self).cols()
    }

    #[inline]
    fn is_blocked(&self, cell: Cell) -> bool {
        (**self).is_blocked(cell)
    }
}

fn check_dimensions(rows: i32, cols: i32) -> Result<Bounds, GridError> {
    if rows <= 0 || cols <= 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    Ok(Bounds::new(rows, cols))
}

// ---------------------------------------------------------------------------
// OpenGrid
// ---------------------------------------------------------------------------

/// A grid without obstacles: every in-bounds cell is traversable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenGrid {
    bounds: Bounds,
}

impl OpenGrid {
    /// Create an open grid. Fails when either dimension is not positive.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        Ok(Self {
            bounds: check_dimensions(rows, cols)?,
        })
    }
}

impl Grid for OpenGrid {
    #[inline]
    fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    fn cols(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    fn is_blocked(&self, _cell: Cell) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// OccupancyGrid
// ---------------------------------------------------------------------------

/// An owned grid of blocked flags stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    bounds: Bounds,
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    /// Create a grid with every cell open.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        let bounds = check_dimensions(rows, cols)?;
        Ok(Self {
            bounds,
            blocked: vec![false; bounds.len()],
        })
    }

    pub(crate) fn from_parts(bounds: Bounds, blocked: Vec<bool>) -> Self {
        debug_assert_eq!(bounds.len(), blocked.len());
        Self { bounds, blocked }
    }

    /// Set whether `cell` is blocked. Returns `false` (and does nothing) when
    /// `cell` is outside the grid.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> bool {
        match self.bounds.index(cell).and_then(|i| self.blocked.get_mut(i)) {
            Some(slot) => {
                *slot = blocked;
                true
            }
            None => false,
        }
    }

    /// Flip the blocked state of `cell`. Returns the new state, or `None`
    /// when `cell` is outside the grid.
    pub fn toggle(&mut self, cell: Cell) -> Option<bool> {
        let slot = self.bounds.index(cell).and_then(|i| self.blocked.get_mut(i))?;
        *slot = !*slot;
        Some(*slot)
    }

    /// Block an entire row, leaving the cells listed in `except` open.
    pub fn block_row(&mut self, row: i32, except: &[Cell]) {
        for col in 0..self.bounds.cols {
            let c = Cell::new(row, col);
            self.set_blocked(c, !except.contains(&c));
        }
    }

    /// Block an entire column, leaving the cells listed in `except` open.
    pub fn block_col(&mut self, col: i32, except: &[Cell]) {
        for row in 0..self.bounds.rows {
            let c = Cell::new(row, col);
            self.set_blocked(c, !except.contains(&c));
        }
    }

    /// Open every cell.
    pub fn clear(&mut self) {
        self.blocked.fill(false);
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Copy this grid into a grid of different dimensions. Cells in the
    /// overlapping region keep their state; new cells are open.
    pub fn resized(&self, rows: i32, cols: i32) -> Result<Self, GridError> {
        let mut out = Self::new(rows, cols)?;
        let target = out.bounds;
        for c in self.bounds.iter().filter(|&c| target.contains(c)) {
            if self.is_blocked(c) {
                out.set_blocked(c, true);
            }
        }
        Ok(out)
    }
}

impl Grid for OccupancyGrid {
    #[inline]
    fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    fn cols(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    fn is_blocked(&self, cell: Cell) -> bool {
        self.bounds
            .index(cell)
            .and_then(|i| self.blocked.get(i).copied())
            .unwrap_or(false)
    }

    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_rejected() {
        assert_eq!(
            OccupancyGrid::new(0, 3),
            Err(GridError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(OpenGrid::new(3, -1).is_err());
    }

    #[test]
    fn open_grid_never_blocks() {
        let g = OpenGrid::new(3, 4).unwrap();
        assert_eq!(g.bounds(), Bounds::new(3, 4));
        assert!(g.bounds().iter().all(|c| g.is_passable(c)));
        assert!(!g.is_passable(Cell::new(3, 0)));
    }

    #[test]
    fn set_and_toggle() {
        let mut g = OccupancyGrid::new(3, 3).unwrap();
        assert!(g.set_blocked(Cell::new(1, 1), true));
        assert!(g.is_blocked(Cell::new(1, 1)));
        assert!(!g.set_blocked(Cell::new(5, 5), true));
        assert_eq!(g.toggle(Cell::new(1, 1)), Some(false));
        assert_eq!(g.toggle(Cell::new(0, 2)), Some(true));
        assert_eq!(g.toggle(Cell::new(-1, 0)), None);
        assert_eq!(g.blocked_count(), 1);
    }

    #[test]
    fn block_row_with_gap() {
        let mut g = OccupancyGrid::new(10, 10).unwrap();
        g.block_row(5, &[Cell::new(5, 9)]);
        assert_eq!(g.blocked_count(), 9);
        assert!(!g.is_blocked(Cell::new(5, 9)));
        assert!(g.is_blocked(Cell::new(5, 0)));

        g.clear();
        g.block_col(2, &[]);
        assert_eq!(g.blocked_count(), 10);
        assert!(g.is_blocked(Cell::new(9, 2)));
    }

    #[test]
    fn out_of_bounds_is_not_blocked_but_not_passable() {
        let g = OccupancyGrid::new(2, 2).unwrap();
        assert!(!g.is_blocked(Cell::new(7, 7)));
        assert!(!g.is_passable(Cell::new(7, 7)));
    }

    #[test]
    fn resized_keeps_overlap() {
        let mut g = OccupancyGrid::new(4, 4).unwrap();
        g.set_blocked(Cell::new(0, 0), true);
        g.set_blocked(Cell::new(3, 3), true);

        let small = g.resized(2, 2).unwrap();
        assert_eq!(small.bounds(), Bounds::new(2, 2));
        assert!(small.is_blocked(Cell::new(0, 0)));
        assert_eq!(small.blocked_count(), 1);

        let big = g.resized(6, 5).unwrap();
        assert!(big.is_blocked(Cell::new(3, 3)));
        assert_eq!(big.blocked_count(), 2);
    }

    #[test]
    fn reference_is_a_grid() {
        fn rows_of<G: Grid>(g: G) -> i32 {
            g.rows()
        }
        let g = OccupancyGrid::new(7, 2).unwrap();
        assert_eq!(rows_of(&g), 7);
    }
}
