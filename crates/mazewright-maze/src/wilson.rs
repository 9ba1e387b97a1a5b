//! Wilson's carver: loop-erased random walks.
//!
//! The seed room joins the tree first. Then, while rooms remain outside
//! the tree, a walk starts from a random one and wanders the lattice
//! until it touches the tree. Whenever it crosses itself the loop is
//! erased. The surviving walk is carved room, wall, room, and so on.
//! The result is a uniformly random spanning tree.

use indexmap::IndexSet;
use mazewright_core::{CellKind, Coord};
use mazewright_grid::Grid;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::lattice::{carve, is_room, room_neighbours, rooms};

enum Phase {
    Seed(Coord),
    Walking,
    Carving { walk: Vec<Coord>, next: usize, wall: bool },
    Finished,
}

/// Stepwise Wilson's-algorithm carver.
pub struct Wilson {
    outside: IndexSet<Coord>,
    phase: Phase,
}

impl Wilson {
    /// A carver that roots its tree at `seed`. A seed that is not a
    /// room cell produces a carver that finishes immediately.
    pub fn new(grid: &Grid, seed: Coord) -> Self {
        if !is_room(grid, seed) {
            return Self {
                outside: IndexSet::new(),
                phase: Phase::Finished,
            };
        }
        Self {
            outside: rooms(grid).into_iter().collect(),
            phase: Phase::Seed(seed),
        }
    }

    /// Walk from `from` until the walk leaves the set of rooms outside
    /// the tree, erasing loops as they form.
    fn loop_erased_walk<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        from: Coord,
        rng: &mut R,
    ) -> Vec<Coord> {
        let mut walk = vec![from];
        let mut here = from;
        while self.outside.contains(&here) {
            let Some(&next) = room_neighbours(grid, here).choose(rng) else {
                break;
            };
            match walk.iter().position(|&c| c == next) {
                Some(pos) => walk.truncate(pos + 1),
                None => walk.push(next),
            }
            here = next;
            if grid.is(here, CellKind::Empty) {
                break;
            }
        }
        walk
    }

    /// Carve until one cell changes. Returns `false` once every room
    /// is in the tree and nothing was carved.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> bool {
        loop {
            match std::mem::replace(&mut self.phase, Phase::Walking) {
                Phase::Seed(seed) => {
                    self.outside.shift_remove(&seed);
                    if carve(grid, seed) {
                        return true;
                    }
                }
                Phase::Walking => {
                    if self.outside.is_empty() {
                        self.phase = Phase::Finished;
                        return false;
                    }
                    let pick = rng.random_range(0..self.outside.len());
                    let Some(&from) = self.outside.get_index(pick) else {
                        continue;
                    };
                    let walk = self.loop_erased_walk(grid, from, rng);
                    self.phase = Phase::Carving {
                        walk,
                        next: 0,
                        wall: false,
                    };
                }
                Phase::Carving { walk, next, wall } => {
                    let Some(&room) = walk.get(next) else {
                        continue;
                    };
                    let changed = if wall {
                        let changed = walk
                            .get(next + 1)
                            .is_some_and(|&after| carve(grid, room.midpoint(after)));
                        self.phase = Phase::Carving {
                            walk,
                            next: next + 1,
                            wall: false,
                        };
                        changed
                    } else {
                        self.outside.shift_remove(&room);
                        let changed = carve(grid, room);
                        self.phase = Phase::Carving {
                            walk,
                            next,
                            wall: true,
                        };
                        changed
                    };
                    if changed {
                        return true;
                    }
                }
                Phase::Finished => {
                    self.phase = Phase::Finished;
                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn walled(size: usize) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        grid.fill(CellKind::Wall);
        grid
    }

    #[test]
    fn spans_every_room() {
        for seed in 0..8 {
            let mut grid = walled(11);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut carver = Wilson::new(&grid, Coord::new(1, 1));
            let mut steps = 0;
            while carver.step(&mut grid, &mut rng) {
                steps += 1;
            }
            let rooms = rooms(&grid);
            assert!(
                rooms.iter().all(|&r| grid.is(r, CellKind::Empty)),
                "seed {seed}"
            );
            assert_eq!(grid.count(CellKind::Empty), 2 * rooms.len() - 1, "seed {seed}");
            assert_eq!(steps, grid.count(CellKind::Empty));
        }
    }

    #[test]
    fn single_room_grid_carves_only_the_seed() {
        let mut grid = walled(3);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut carver = Wilson::new(&grid, Coord::new(1, 1));
        assert!(carver.step(&mut grid, &mut rng));
        assert!(!carver.step(&mut grid, &mut rng));
        assert_eq!(grid.count(CellKind::Empty), 1);
    }

    #[test]
    fn off_lattice_seed_finishes_at_once() {
        let mut grid = walled(7);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut carver = Wilson::new(&grid, Coord::new(1, 2));
        assert!(!carver.step(&mut grid, &mut rng));
    }
}
