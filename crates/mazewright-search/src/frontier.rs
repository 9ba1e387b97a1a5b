//! Min-priority frontier shared by Dijkstra and A*.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mazewright_process::TrailId;

/// Min-heap of trail entries keyed by priority.
///
/// Ties pop in insertion order: trail ids are allocated monotonically,
/// so `(priority, id)` reproduces a stable ascending sort.
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<Reverse<(u32, TrailId)>>,
}

impl PriorityFrontier {
    pub(crate) fn push(&mut self, priority: u32, id: TrailId) {
        self.heap.push(Reverse((priority, id)));
    }

    pub(crate) fn pop(&mut self) -> Option<TrailId> {
        self.heap.pop().map(|Reverse((_, id))| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_core::Coord;
    use mazewright_process::Trail;

    #[test]
    fn lowest_priority_first_then_fifo() {
        let mut trail = Trail::new();
        let a = trail.root(Coord::new(0, 0));
        let b = trail.root(Coord::new(0, 1));
        let c = trail.root(Coord::new(0, 2));
        let mut frontier = PriorityFrontier::default();
        frontier.push(5, a);
        frontier.push(3, b);
        frontier.push(3, c);
        assert_eq!(frontier.pop(), Some(b));
        assert_eq!(frontier.pop(), Some(c));
        assert_eq!(frontier.pop(), Some(a));
        assert_eq!(frontier.pop(), None);
    }
}
