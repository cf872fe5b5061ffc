//! Demo settings.

use gridpath_core::Cell;

/// Terminal columns used to draw one grid cell, so cells look square.
pub const CELL_WIDTH: u16 = 2;
/// Terminal rows kept below the grid for the status and help lines.
pub const STATUS_ROWS: u16 = 2;

/// Settings for a [`Demo`](crate::Demo).
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Cell,
    pub goal: Cell,
    /// Probability that a scattered cell is blocked, in `[0, 1]`.
    pub obstacle_density: f64,
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 30,
            start: Cell::new(5, 5),
            goal: Cell::new(10, 15),
            obstacle_density: 0.2,
            seed: 42,
        }
    }
}

impl DemoConfig {
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_endpoints(mut self, start: Cell, goal: Cell) -> Self {
        self.start = start;
        self.goal = goal;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.obstacle_density = density.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Size the grid to fill a `width × height` terminal.
    pub fn fit(self, width: u16, height: u16) -> Self {
        let (rows, cols) = grid_size_for(width, height);
        self.with_size(rows, cols)
    }
}

/// Grid `(rows, cols)` that fits a terminal of `width × height`; at least 1×1.
pub fn grid_size_for(width: u16, height: u16) -> (i32, i32) {
    let rows = height.saturating_sub(STATUS_ROWS).max(1);
    let cols = (width / CELL_WIDTH).max(1);
    (i32::from(rows), i32::from(cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_terminal() {
        let c = DemoConfig::default().fit(80, 24);
        assert_eq!((c.rows, c.cols), (22, 40));
        assert_eq!(grid_size_for(1, 1), (1, 1));
    }

    #[test]
    fn density_is_clamped() {
        assert_eq!(DemoConfig::default().with_density(3.0).obstacle_density, 1.0);
        assert_eq!(DemoConfig::default().with_density(-1.0).obstacle_density, 0.0);
    }
}
