//! Recursive-backtracking carver.
//!
//! A depth-first walk over the room lattice. Each room entered is
//! carved, its unvisited Wall neighbours are shuffled, and the walk
//! descends into each one still unvisited, carving the wall between
//! first. The recursion is kept on an explicit stack so the walk can
//! pause after any single carve.

use mazewright_core::{CellKind, Coord};
use mazewright_grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::lattice::{carve, is_room, room_neighbours, CellMask};

struct Frame {
    room: Coord,
    pending: SmallVec<[Coord; 4]>,
    next: usize,
}

/// Stepwise recursive-backtracking carver.
pub struct Backtracker {
    visited: CellMask,
    stack: Vec<Frame>,
    entering: Option<Coord>,
}

impl Backtracker {
    /// A carver that starts at `seed`. A seed that is not a room cell
    /// produces a carver that finishes immediately.
    pub fn new(grid: &Grid, seed: Coord) -> Self {
        Self {
            visited: CellMask::new(grid.size()),
            stack: Vec::new(),
            entering: is_room(grid, seed).then_some(seed),
        }
    }

    /// Carve until one cell changes. Returns `false` once the walk is
    /// exhausted and nothing was carved.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> bool {
        loop {
            if let Some(room) = self.entering.take() {
                if !self.visited.insert(room) {
                    continue;
                }
                let carved = carve(grid, room);
                let mut pending: SmallVec<[Coord; 4]> = room_neighbours(grid, room)
                    .into_iter()
                    .filter(|&n| !self.visited.get(n) && grid.is(n, CellKind::Wall))
                    .collect();
                pending.shuffle(rng);
                self.stack.push(Frame {
                    room,
                    pending,
                    next: 0,
                });
                if carved {
                    return true;
                }
                continue;
            }

            let Some(frame) = self.stack.last_mut() else {
                return false;
            };
            let Some(&target) = frame.pending.get(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;
            if self.visited.get(target) {
                continue;
            }
            let wall = frame.room.midpoint(target);
            self.entering = Some(target);
            if grid.is_interior(wall) && carve(grid, wall) {
                return true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::rooms;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn walled(size: usize) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        grid.fill(CellKind::Wall);
        grid
    }

    #[test]
    fn carves_every_room_as_a_tree() {
        let mut grid = walled(11);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut carver = Backtracker::new(&grid, Coord::new(1, 1));
        let mut steps = 0;
        while carver.step(&mut grid, &mut rng) {
            steps += 1;
        }
        let rooms = rooms(&grid);
        assert!(rooms.iter().all(|&r| grid.is(r, CellKind::Empty)));
        // A spanning tree over n rooms opens n rooms plus n - 1 walls.
        let open = grid.count(CellKind::Empty);
        assert_eq!(open, 2 * rooms.len() - 1);
        assert_eq!(steps, open);
    }

    #[test]
    fn off_lattice_seed_finishes_at_once() {
        let mut grid = walled(7);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut carver = Backtracker::new(&grid, Coord::new(2, 2));
        assert!(!carver.step(&mut grid, &mut rng));
        assert_eq!(grid.count(CellKind::Empty), 0);
    }

    #[test]
    fn border_stays_walled() {
        let mut grid = walled(9);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut carver = Backtracker::new(&grid, Coord::new(3, 3));
        while carver.step(&mut grid, &mut rng) {}
        for coord in grid.coords().filter(|&c| !grid.is_interior(c)) {
            assert!(grid.is(coord, CellKind::Wall), "{coord}");
        }
    }
}
