use std::collections::HashMap;
use std::collections::hash_map::Entry;

use gridpath_core::{Cell, Grid};
use log::{debug, trace};

use crate::distance::manhattan;
use crate::error::{Endpoint, PathError};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::path::{Outcome, Path};

/// Per-cell search bookkeeping, alive for one query.
struct Node {
    g: u64,
    parent: Option<Cell>,
    open: bool,
}

/// Compute a shortest 4-directional path from `start` to `goal` using A*.
///
/// Every step costs 1 and the heuristic is [`manhattan`], so the returned
/// path is optimal. Neighbours outside the grid or blocked by it are skipped;
/// `start` itself is never checked for blocking.
///
/// Among several shortest paths the choice is deterministic: the frontier
/// pops the smallest `f`, then the smallest heuristic, then the earliest
/// inserted cell, and neighbours are visited up, down, left, right.
///
/// # Errors
///
/// Returns [`PathError::OutOfBounds`] without searching when `start` or
/// `goal` lies outside the grid (start is checked first). A goal that cannot
/// be reached is reported as [`Outcome::Unreachable`], not as an error.
pub fn find_path<G: Grid + ?Sized>(
    grid: &G,
    start: Cell,
    goal: Cell,
) -> Result<Outcome, PathError> {
    let bounds = grid.bounds();
    for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !bounds.contains(cell) {
            debug!("astar: {endpoint} {cell} outside {bounds} grid");
            return Err(PathError::OutOfBounds {
                endpoint,
                cell,
                rows: bounds.rows,
                cols: bounds.cols,
            });
        }
    }

    trace!("astar: {start} -> {goal} on {bounds} grid");

    if start == goal {
        return Ok(Outcome::Found(Path::from_cells(vec![start])));
    }

    let mut nodes: HashMap<Cell, Node> = HashMap::new();
    let mut open = Frontier::new();
    let mut nbuf = Neighbors::new();

    nodes.insert(
        start,
        Node {
            g: 0,
            parent: None,
            open: true,
        },
    );
    open.push(start, 0, manhattan(start, goal));

    let mut expanded = 0usize;
    let mut peak_open = 1usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        // Skip stale entries: the cell was closed, or improved after this push.
        let Some(node) = nodes.get_mut(&current.cell) else {
            continue;
        };
        if !node.open || node.g != current.g {
            continue;
        }

        if current.cell == goal {
            break 'search true;
        }

        node.open = false;
        expanded += 1;
        let tentative_g = current.g + 1;

        for &n in nbuf.cardinal(current.cell, |c| grid.is_passable(c)) {
            match nodes.entry(n) {
                Entry::Occupied(mut e) => {
                    let next = e.get_mut();
                    if tentative_g >= next.g {
                        continue;
                    }
                    next.g = tentative_g;
                    next.parent = Some(current.cell);
                    next.open = true;
                }
                Entry::Vacant(e) => {
                    e.insert(Node {
                        g: tentative_g,
                        parent: Some(current.cell),
                        open: true,
                    });
                }
            }
            open.push(n, tentative_g, manhattan(n, goal));
        }
        peak_open = peak_open.max(open.len());
    };

    if !found {
        debug!("astar: {goal} unreachable from {start}, expanded {expanded} cells");
        return Ok(Outcome::Unreachable);
    }

    // Walk parents back from the goal.
    let mut cells = Vec::new();
    let mut cur = Some(goal);
    while let Some(c) = cur {
        cells.push(c);
        cur = nodes.get(&c).and_then(|n| n.parent);
    }
    cells.reverse();

    let path = Path::from_cells(cells);
    debug!(
        "astar: {start} -> {goal} cost {}, expanded {expanded} cells, peak frontier {peak_open}",
        path.cost()
    );
    Ok(Outcome::Found(path))
}
