//! Breadth-first reachability over non-Wall cells.

use std::collections::VecDeque;

use indexmap::IndexMap;
use mazewright_core::Coord;

use crate::grid::Grid;

impl Grid {
    /// Whether `end` can be reached from `start` through orthogonal
    /// moves over non-Wall cells.
    ///
    /// The start cell itself is not required to be open; only the
    /// cells stepped onto are. Out-of-bounds endpoints are unreachable.
    pub fn is_solvable(&self, start: Coord, end: Coord) -> bool {
        self.shortest_distance(start, end).is_some()
    }

    /// Number of moves on a shortest `start → end` route, if any.
    pub fn shortest_distance(&self, start: Coord, end: Coord) -> Option<usize> {
        if !self.contains(start) || !self.contains(end) {
            return None;
        }
        let mut dist: IndexMap<Coord, usize> = IndexMap::new();
        let mut queue = VecDeque::new();
        dist.insert(start, 0);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            let d = dist[&current];
            if current == end {
                return Some(d);
            }
            for next in self.neighbours(current) {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Every cell reachable from `start`, in breadth-first order.
    pub fn reachable_from(&self, start: Coord) -> Vec<Coord> {
        if !self.contains(start) {
            return Vec::new();
        }
        let mut seen: IndexMap<Coord, ()> = IndexMap::new();
        seen.insert(start, ());
        let mut cursor = 0;
        while let Some((&current, _)) = seen.get_index(cursor) {
            cursor += 1;
            for next in self.neighbours(current) {
                seen.entry(next).or_insert(());
            }
        }
        seen.into_keys().collect()
    }
}
