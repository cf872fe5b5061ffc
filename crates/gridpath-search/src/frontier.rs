//! Open set for the A* search.
//!
//! A binary heap keyed by `(f, h, seq)`. Decrease-key is done by pushing the
//! improved cell again; the search drops the outdated entry when it surfaces
//! (see [`NodeRef::g`]).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Cell;

/// A frontier entry as it was when pushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeRef {
    pub(crate) cell: Cell,
    /// Cost from start at push time. If the cell's best `g` has since
    /// dropped, this entry is stale.
    pub(crate) g: u64,
    pub(crate) f: u64,
    pub(crate) h: u64,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the smallest f.
        // Ties go to the smaller h, then to the earliest push.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `cell` with cost-so-far `g` and heuristic `h`.
    pub(crate) fn push(&mut self, cell: Cell, g: u64, h: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(NodeRef {
            cell,
            g,
            f: g + h,
            h,
            seq,
        });
    }

    /// Remove and return the entry with the smallest priority.
    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    /// Number of entries, stale ones included.
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
