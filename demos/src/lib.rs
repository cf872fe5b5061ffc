//! Interactive pathfinding demo model, shared by the terminal binary and the
//! tests.
//!
//! The demo owns the grid and the current start and goal cells. Input moves
//! the endpoints or edits obstacles and marks the state dirty; the search is
//! only rerun on the next [`Demo::refresh`] after such a change.

mod config;

use gridpath_core::{Cell, Grid, GridError, OccupancyGrid};
use gridpath_crossterm::{Canvas, Color, Glyph, Input};
use gridpath_search::{Outcome, PathError, find_path};
use log::{info, warn};
use rand::{RngExt, SeedableRng};

pub use config::{CELL_WIDTH, DemoConfig, STATUS_ROWS, grid_size_for};

// Colours
const COL_BG: Color = Color::from_rgb(15, 23, 42);
const COL_GRID: Color = Color::from_rgb(30, 41, 59);
const COL_WALL: Color = Color::from_rgb(71, 85, 105);
const COL_PATH: Color = Color::from_rgb(56, 189, 248);
const COL_START: Color = Color::from_rgb(34, 197, 94);
const COL_GOAL: Color = Color::from_rgb(239, 68, 68);
const COL_TEXT: Color = Color::from_rgb(148, 163, 184);

const HELP_TEXT: &str =
    "Shift+Click: start | Click: goal | Right-click: wall | w: wall row | x: swap | r: reroll | c: clear | q: quit";

/// What the main loop should do after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Continue,
    Quit,
}

/// Demo state: grid, endpoints and the last search result.
pub struct Demo {
    grid: OccupancyGrid,
    start: Cell,
    goal: Cell,
    density: f64,
    seed: u64,
    follow_terminal: bool,
    result: Option<Result<Outcome, PathError>>,
    dirty: bool,
    queries: u64,
}

impl Demo {
    /// Build a demo with randomly scattered obstacles. The grid follows
    /// terminal resizes.
    pub fn new(config: &DemoConfig) -> Result<Self, GridError> {
        let grid = OccupancyGrid::new(config.rows, config.cols)?;
        let mut demo = Self::with_grid(grid, config);
        demo.follow_terminal = true;
        demo.scatter();
        Ok(demo)
    }

    /// Build a demo around a fixed grid, e.g. one loaded from a map file.
    /// Endpoints from `config` are clamped into the grid.
    pub fn with_grid(grid: OccupancyGrid, config: &DemoConfig) -> Self {
        let bounds = grid.bounds();
        Self {
            start: bounds.clamp(config.start),
            goal: bounds.clamp(config.goal),
            grid,
            density: config.obstacle_density,
            seed: config.seed,
            follow_terminal: false,
            result: None,
            dirty: true,
            queries: 0,
        }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Result of the last search, if one has run.
    pub fn result(&self) -> Option<&Result<Outcome, PathError>> {
        self.result.as_ref()
    }

    /// Number of searches run so far.
    pub fn queries(&self) -> u64 {
        self.queries
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Re-block cells at random from the current seed, keeping both endpoints
    /// open.
    fn scatter(&mut self) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(self.seed);
        for c in self.grid.bounds() {
            let r: f64 = rng.random();
            let blocked = r < self.density && c != self.start && c != self.goal;
            self.grid.set_blocked(c, blocked);
        }
        self.dirty = true;
    }

    /// Map a terminal position to a grid cell, clamped into the grid. Clicks
    /// on the status lines map to nothing.
    pub fn screen_to_cell(&self, x: u16, y: u16) -> Option<Cell> {
        let row = i32::from(y);
        if row >= self.grid.rows() {
            return None;
        }
        let col = i32::from(x / CELL_WIDTH);
        Some(self.grid.bounds().clamp(Cell::new(row, col)))
    }

    fn move_start(&mut self, cell: Cell) {
        if cell != self.start {
            self.start = cell;
            self.dirty = true;
        }
    }

    fn move_goal(&mut self, cell: Cell) {
        if cell != self.goal {
            self.goal = cell;
            self.dirty = true;
        }
    }

    /// Apply one input.
    pub fn handle(&mut self, input: Input) -> Effect {
        match input {
            Input::Click { x, y, shift } => {
                if let Some(cell) = self.screen_to_cell(x, y) {
                    if shift {
                        self.move_start(cell);
                    } else {
                        self.move_goal(cell);
                    }
                }
            }
            Input::RightClick { x, y } => {
                if let Some(cell) = self.screen_to_cell(x, y) {
                    if cell != self.start && cell != self.goal {
                        self.grid.toggle(cell);
                        self.dirty = true;
                    }
                }
            }
            Input::Key('q') | Input::Escape => return Effect::Quit,
            Input::Key('r') => {
                self.seed = self.seed.wrapping_add(1);
                info!("demo: rescattering obstacles with seed {}", self.seed);
                self.scatter();
            }
            Input::Key('c') => {
                self.grid.clear();
                self.dirty = true;
            }
            Input::Key('w') => {
                let row = self.grid.rows() / 2;
                let gap = Cell::new(row, self.grid.cols() - 1);
                self.grid.block_row(row, &[gap, self.start, self.goal]);
                self.dirty = true;
            }
            Input::Key('x') => {
                std::mem::swap(&mut self.start, &mut self.goal);
                self.dirty = true;
            }
            Input::Key(_) => {}
            Input::Resize { width, height } => self.resize(width, height),
        }
        Effect::Continue
    }

    fn resize(&mut self, width: u16, height: u16) {
        if !self.follow_terminal {
            return;
        }
        let (rows, cols) = grid_size_for(width, height);
        if rows == self.grid.rows() && cols == self.grid.cols() {
            return;
        }
        match self.grid.resized(rows, cols) {
            Ok(grid) => {
                info!("demo: grid resized to {rows}x{cols}");
                self.grid = grid;
                let bounds = self.grid.bounds();
                self.start = bounds.clamp(self.start);
                self.goal = bounds.clamp(self.goal);
                self.dirty = true;
            }
            Err(e) => warn!("demo: cannot resize grid: {e}"),
        }
    }

    /// Rerun the search if anything changed since the last run. Returns
    /// whether a search ran.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.result = Some(find_path(&self.grid, self.start, self.goal));
        self.dirty = false;
        self.queries += 1;
        true
    }

    fn status_line(&self) -> String {
        match &self.result {
            None => String::from("searching..."),
            Some(Ok(Outcome::Found(p))) => format!(
                "{} -> {}: {} steps",
                self.start,
                self.goal,
                p.cost()
            ),
            Some(Ok(Outcome::Unreachable)) => {
                format!("{} -> {}: no path", self.start, self.goal)
            }
            Some(Err(e)) => format!("error: {e}"),
        }
    }

    fn paint_cell(canvas: &mut Canvas, cell: Cell, ch: char, fg: Color, bg: Color) {
        let (Ok(y), Ok(col)) = (u16::try_from(cell.row), u16::try_from(cell.col)) else {
            return;
        };
        let x = col.saturating_mul(CELL_WIDTH);
        for dx in 0..CELL_WIDTH {
            canvas.set(x.saturating_add(dx), y, Glyph::new(ch, fg, bg));
        }
    }

    /// Draw the grid, path, endpoints and status lines.
    pub fn render(&self, canvas: &mut Canvas) {
        canvas.fill(Glyph::new(' ', COL_TEXT, COL_BG));

        for c in self.grid.bounds() {
            if self.grid.is_blocked(c) {
                Self::paint_cell(canvas, c, ' ', COL_WALL, COL_WALL);
            } else {
                Self::paint_cell(canvas, c, '·', COL_GRID, COL_BG);
            }
        }

        if let Some(Ok(Outcome::Found(path))) = &self.result {
            for &c in path {
                Self::paint_cell(canvas, c, ' ', COL_PATH, COL_PATH);
            }
        }

        Self::paint_cell(canvas, self.start, ' ', COL_START, COL_START);
        Self::paint_cell(canvas, self.goal, ' ', COL_GOAL, COL_GOAL);

        let Ok(status_y) = u16::try_from(self.grid.rows()) else {
            return;
        };
        canvas.print(0, status_y, &self.status_line(), COL_TEXT, COL_BG);
        canvas.print(0, status_y.saturating_add(1), HELP_TEXT, COL_TEXT, COL_BG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_demo() -> Demo {
        Demo::new(&DemoConfig::default().with_size(10, 10).with_density(0.0)).unwrap()
    }

    fn click(cell: Cell, shift: bool) -> Input {
        Input::Click {
            x: cell.col as u16 * CELL_WIDTH,
            y: cell.row as u16,
            shift,
        }
    }

    #[test]
    fn scatter_keeps_endpoints_open_and_is_seeded() {
        let cfg = DemoConfig::default().with_density(0.9);
        let a = Demo::new(&cfg).unwrap();
        let b = Demo::new(&cfg).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert!(!a.grid().is_blocked(a.start()));
        assert!(!a.grid().is_blocked(a.goal()));
        assert!(a.grid().blocked_count() > 0);
    }

    #[test]
    fn endpoints_clamped_into_grid() {
        let cfg = DemoConfig::default()
            .with_size(4, 4)
            .with_endpoints(Cell::new(-2, 1), Cell::new(10, 15));
        let d = Demo::new(&cfg).unwrap();
        assert_eq!(d.start(), Cell::new(0, 1));
        assert_eq!(d.goal(), Cell::new(3, 3));
    }

    #[test]
    fn search_runs_only_when_dirty() {
        let mut d = open_demo();
        assert!(d.refresh());
        assert!(!d.refresh());
        assert_eq!(d.queries(), 1);

        // Clicking the current goal changes nothing.
        d.handle(click(d.goal(), false));
        assert!(!d.is_dirty());

        d.handle(click(Cell::new(9, 0), false));
        assert!(d.is_dirty());
        assert!(d.refresh());
        assert_eq!(d.queries(), 2);
        let path = d.result().unwrap().as_ref().unwrap().path().unwrap();
        assert_eq!(path.goal(), Cell::new(9, 0));
        assert_eq!(path.start(), Cell::new(5, 5));
    }

    #[test]
    fn shift_click_moves_start() {
        let mut d = open_demo();
        d.handle(click(Cell::new(0, 0), true));
        assert_eq!(d.start(), Cell::new(0, 0));
        // Default goal (10, 15) was clamped into the 10x10 grid.
        assert_eq!(d.goal(), Cell::new(9, 9));
    }

    #[test]
    fn clicks_are_clamped_and_status_rows_ignored() {
        let mut d = open_demo();
        d.handle(Input::Click {
            x: 200,
            y: 3,
            shift: false,
        });
        assert_eq!(d.goal(), Cell::new(3, 9));

        let before = d.goal();
        d.handle(Input::Click {
            x: 0,
            y: 10,
            shift: false,
        });
        assert_eq!(d.goal(), before);
    }

    #[test]
    fn wall_row_forces_gap() {
        let mut d = open_demo();
        d.handle(click(Cell::new(0, 0), true));
        d.handle(click(Cell::new(9, 0), false));
        d.handle(Input::Key('w'));
        d.refresh();
        let path = d.result().unwrap().as_ref().unwrap().path().unwrap();
        assert!(path.contains(Cell::new(5, 9)));
        assert!(path.is_valid_on(d.grid()));
    }

    #[test]
    fn right_click_walls_off_goal() {
        let mut d = open_demo();
        d.handle(click(Cell::new(0, 0), true));
        d.handle(click(Cell::new(0, 2), false));
        // Goal at (0, 2): block (0, 1), (0, 3) and (1, 2).
        for c in [Cell::new(0, 1), Cell::new(0, 3), Cell::new(1, 2)] {
            d.handle(Input::RightClick {
                x: c.col as u16 * CELL_WIDTH,
                y: c.row as u16,
            });
        }
        d.refresh();
        assert_eq!(d.result(), Some(&Ok(Outcome::Unreachable)));

        // Right-clicking an endpoint does nothing.
        d.handle(Input::RightClick { x: 0, y: 0 });
        assert!(!d.grid().is_blocked(Cell::new(0, 0)));

        d.handle(Input::Key('c'));
        d.refresh();
        assert!(d.result().unwrap().as_ref().unwrap().is_found());
    }

    #[test]
    fn swap_endpoints() {
        let mut d = open_demo();
        let (s, g) = (d.start(), d.goal());
        d.handle(Input::Key('x'));
        assert_eq!((d.start(), d.goal()), (g, s));
    }

    #[test]
    fn quit_keys() {
        let mut d = open_demo();
        assert_eq!(d.handle(Input::Key('q')), Effect::Quit);
        assert_eq!(d.handle(Input::Escape), Effect::Quit);
        assert_eq!(d.handle(Input::Key('z')), Effect::Continue);
    }

    #[test]
    fn reroll_changes_layout() {
        let mut d = Demo::new(&DemoConfig::default().with_density(0.3)).unwrap();
        let before = d.grid().clone();
        d.handle(Input::Key('r'));
        assert!(d.is_dirty());
        assert_ne!(d.grid(), &before);
    }

    #[test]
    fn resize_follows_terminal_and_clamps() {
        let mut d = open_demo();
        d.handle(Input::Resize {
            width: 8,
            height: 6,
        });
        assert_eq!((d.grid().rows(), d.grid().cols()), (4, 4));
        assert_eq!(d.start(), Cell::new(3, 3));
        assert_eq!(d.goal(), Cell::new(3, 3));
        d.refresh();
        assert_eq!(d.result().unwrap().as_ref().unwrap().path().unwrap().len(), 1);
    }

    #[test]
    fn fixed_grid_ignores_resize() {
        let grid = OccupancyGrid::from_ascii("...\n.#.\n...").unwrap();
        let mut d = Demo::with_grid(grid, &DemoConfig::default());
        assert_eq!(d.start(), Cell::new(2, 2));
        d.handle(Input::Resize {
            width: 80,
            height: 24,
        });
        assert_eq!(d.grid().rows(), 3);
    }

    #[test]
    fn render_marks_endpoints_and_status() {
        let mut d = open_demo();
        d.refresh();
        let mut canvas = Canvas::new(20, 12);
        d.render(&mut canvas);

        let s = d.start();
        let g = d.goal();
        assert_eq!(canvas.get(s.col as u16 * CELL_WIDTH, s.row as u16).bg, COL_START);
        assert_eq!(canvas.get(g.col as u16 * CELL_WIDTH + 1, g.row as u16).bg, COL_GOAL);
        // A cell strictly inside the path is painted as path.
        let path = d.result().unwrap().as_ref().unwrap().path().unwrap();
        let mid = path.cells()[1];
        assert_eq!(canvas.get(mid.col as u16 * CELL_WIDTH, mid.row as u16).bg, COL_PATH);
        // Status line sits right under the grid.
        assert_eq!(canvas.get(0, 10).ch, '(');
    }
}
