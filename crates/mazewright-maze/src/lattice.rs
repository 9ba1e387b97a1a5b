//! The odd-coordinate lattice perfect mazes are carved on.
//!
//! Room cells sit at odd `(row, col)` strictly inside the border. Two
//! rooms two steps apart are joined by carving the wall cell between
//! them. Keeping rooms on the lattice guarantees single-thickness walls.

use mazewright_core::{CellKind, Coord};
use mazewright_grid::Grid;
use rand::Rng;
use smallvec::SmallVec;

const LATTICE_STEPS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Whether `coord` is a room cell: interior with both components odd.
pub fn is_room(grid: &Grid, coord: Coord) -> bool {
    grid.is_interior(coord) && coord.row % 2 == 1 && coord.col % 2 == 1
}

/// Every room cell, row-major.
pub fn rooms(grid: &Grid) -> Vec<Coord> {
    grid.coords().filter(|&c| is_room(grid, c)).collect()
}

/// Room cells two steps from `coord`, in up, down, left, right order.
pub fn room_neighbours(grid: &Grid, coord: Coord) -> SmallVec<[Coord; 4]> {
    LATTICE_STEPS
        .iter()
        .map(|&(dr, dc)| coord.offset(dr, dc))
        .filter(|&n| is_room(grid, n))
        .collect()
}

/// Snap a requested start onto the lattice.
///
/// An interior start keeps each odd component and moves each even one
/// back by one (never below 1). A border or out-of-grid start is
/// replaced by a random room. Returns `None` when the grid has no rooms.
pub fn seed_room<R: Rng + ?Sized>(grid: &Grid, start: Coord, rng: &mut R) -> Option<Coord> {
    let size = grid.size() as i32;
    if size < 3 {
        return None;
    }
    let snap = |v: i32| if v % 2 == 0 { (v - 1).max(1) } else { v };
    let seed = if grid.is_interior(start) {
        Coord::new(snap(start.row), snap(start.col))
    } else {
        let odd = |rng: &mut R| {
            let slots = (size - 1) / 2;
            2 * rng.random_range(0..slots) + 1
        };
        Coord::new(odd(&mut *rng), odd(&mut *rng))
    };
    is_room(grid, seed).then_some(seed)
}

/// Turn the cell at `coord` Empty unless it is already open or holds a
/// Start/End marker. Returns whether the grid changed.
pub fn carve(grid: &mut Grid, coord: Coord) -> bool {
    match grid.cell(coord) {
        Some(CellKind::Empty) | None => false,
        Some(kind) if kind.is_endpoint() => false,
        Some(_) => grid.set_cell(coord, CellKind::Empty),
    }
}

/// A per-cell boolean mask over a grid's coordinates.
#[derive(Clone, Debug)]
pub(crate) struct CellMask {
    size: usize,
    bits: Vec<bool>,
}

impl CellMask {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            bits: vec![false; size * size],
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let n = self.size as i32;
        if coord.row < 0 || coord.row >= n || coord.col < 0 || coord.col >= n {
            return None;
        }
        Some(coord.row as usize * self.size + coord.col as usize)
    }

    pub(crate) fn get(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|i| self.bits[i])
    }

    /// Set the bit. Returns `true` if it was previously clear.
    pub(crate) fn insert(&mut self, coord: Coord) -> bool {
        match self.index(coord) {
            Some(i) if !self.bits[i] => {
                self.bits[i] = true;
                true
            }
            _ => false,
        }
    }
}
