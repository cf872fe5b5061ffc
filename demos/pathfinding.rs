//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin pathfinding [MAP_FILE]
//!
//! With a map file (`.` open, `#` blocked) the grid is fixed; otherwise it
//! fills the terminal and obstacles are scattered at random.

use std::error::Error;
use std::time::Duration;

use gridpath_core::OccupancyGrid;
use gridpath_crossterm::{Canvas, Input, TermDriver};
use gridpath_demos::{Demo, DemoConfig, Effect};

const FRAME: Duration = Duration::from_millis(16);

fn run() -> Result<(), Box<dyn Error>> {
    let map = std::env::args()
        .nth(1)
        .map(std::fs::read_to_string)
        .transpose()?;

    let mut driver = TermDriver::new();
    let (width, height) = driver.size()?;
    let config = DemoConfig::default().fit(width, height);
    let mut demo = match map {
        Some(text) => Demo::with_grid(OccupancyGrid::from_ascii(&text)?, &config),
        None => Demo::new(&config)?,
    };

    driver.init()?;
    let mut canvas = Canvas::new(width, height);
    loop {
        demo.refresh();
        demo.render(&mut canvas);
        driver.flush(&canvas)?;

        for input in driver.poll(FRAME)? {
            if let Input::Resize { width, height } = input {
                canvas = Canvas::new(width, height);
            }
            if demo.handle(input) == Effect::Quit {
                driver.close();
                return Ok(());
            }
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
