//! Randomized Prim's carver.
//!
//! Grows a single tree from the seed. The frontier holds unvisited Wall
//! rooms two steps from the tree; each step draws one uniformly, links
//! it to a random visited neighbour, and adds its own frontier rooms.

use mazewright_core::{CellKind, Coord};
use mazewright_grid::Grid;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::lattice::{carve, is_room, room_neighbours, CellMask};

enum Phase {
    Seed(Coord),
    Growing,
    /// A room was just carved; the wall linking it to the tree is next.
    Linking { room: Coord, wall: Coord },
    Finished,
}

/// Stepwise randomized-Prim carver.
pub struct Prim {
    visited: CellMask,
    queued: CellMask,
    frontier: Vec<Coord>,
    phase: Phase,
}

impl Prim {
    /// A carver that grows from `seed`. A seed that is not a room cell
    /// produces a carver that finishes immediately.
    pub fn new(grid: &Grid, seed: Coord) -> Self {
        let phase = if is_room(grid, seed) {
            Phase::Seed(seed)
        } else {
            Phase::Finished
        };
        Self {
            visited: CellMask::new(grid.size()),
            queued: CellMask::new(grid.size()),
            frontier: Vec::new(),
            phase,
        }
    }

    fn enqueue_around(&mut self, grid: &Grid, room: Coord) {
        for n in room_neighbours(grid, room) {
            if !self.visited.get(n) && grid.is(n, CellKind::Wall) && self.queued.insert(n) {
                self.frontier.push(n);
            }
        }
    }

    /// Carve until one cell changes. Returns `false` once the frontier
    /// is empty and nothing was carved.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> bool {
        loop {
            match std::mem::replace(&mut self.phase, Phase::Growing) {
                Phase::Seed(seed) => {
                    self.visited.insert(seed);
                    let carved = carve(grid, seed);
                    self.enqueue_around(grid, seed);
                    if carved {
                        return true;
                    }
                }
                Phase::Linking { room, wall } => {
                    self.visited.insert(wall);
                    let carved = carve(grid, wall);
                    self.enqueue_around(grid, room);
                    if carved {
                        return true;
                    }
                }
                Phase::Growing => {
                    if self.frontier.is_empty() {
                        self.phase = Phase::Finished;
                        return false;
                    }
                    let pick = rng.random_range(0..self.frontier.len());
                    let room = self.frontier.swap_remove(pick);
                    let linked: SmallVec<[Coord; 4]> = room_neighbours(grid, room)
                        .into_iter()
                        .filter(|&n| self.visited.get(n))
                        .collect();
                    let Some(&anchor) = linked.choose(rng) else {
                        continue;
                    };
                    self.visited.insert(room);
                    self.phase = Phase::Linking {
                        room,
                        wall: room.midpoint(anchor),
                    };
                    if carve(grid, room) {
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
