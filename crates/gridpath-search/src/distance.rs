use gridpath_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for unit-cost 4-directional movement. The
/// result is widened to `u64` so any pair of `i32` cells fits.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u64 {
    u64::from(a.row.abs_diff(b.row)) + u64::from(a.col.abs_diff(b.col))
}
