use gridpath_core::{Cell, Grid};

/// A shortest path, start to goal inclusive. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Cell>", into = "Vec<Cell>"))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// The cells in order, from start to goal.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Last cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit steps, i.e. `len() - 1`. Same unit as [`manhattan`].
    ///
    /// [`manhattan`]: crate::manhattan
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cells.len().saturating_sub(1) as u64
    }

    /// Whether the path passes through `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Iterate over the cells from start to goal.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Check the path against `grid`: every cell in bounds, consecutive cells
    /// 4-adjacent, and every cell after the start unblocked. The start is
    /// allowed to be blocked since the search never checks it.
    pub fn is_valid_on<G: Grid + ?Sized>(&self, grid: &G) -> bool {
        let Some((&first, rest)) = self.cells.split_first() else {
            return false;
        };
        if !grid.in_bounds(first) {
            return false;
        }
        let mut prev = first;
        for &c in rest {
            if !grid.is_passable(c) || !prev.is_adjacent_4(c) {
                return false;
            }
            prev = c;
        }
        true
    }
}

impl TryFrom<Vec<Cell>> for Path {
    type Error = &'static str;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err("a path has at least one cell");
        }
        Ok(Self { cells })
    }
}

impl From<Path> for Vec<Cell> {
    fn from(p: Path) -> Self {
        p.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// The successful result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A shortest path was found.
    Found(Path),
    /// The goal is not connected to the start through unblocked cells.
    Unreachable,
}

impl Outcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether the goal could not be reached.
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::Unreachable => None,
        }
    }

    /// Consume the outcome, returning the path if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::Unreachable => None,
        }
    }
}
