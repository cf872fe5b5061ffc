use gridpath_core::Cell;

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbours of a cell (up, down, left, right),
/// filtered by a predicate, reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbours of `c`, keeping only those for
    /// which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_filters_and_reuses() {
        let mut nb = Neighbors::new();
        let corner = nb.cardinal(Cell::new(0, 0), |c| c.row >= 0 && c.col >= 0);
        assert_eq!(corner, &[Cell::new(1, 0), Cell::new(0, 1)]);

        let all = nb.cardinal(Cell::new(3, 3), |_| true);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Cell::new(2, 3));
    }
}
