//! Connectivity repair for generated grids.
//!
//! These helpers only ever open cells: each turns Wall (or other
//! non-marker) cells Empty and never touches a Start/End marker. The
//! solvability test itself lives on [`Grid::is_solvable`].

use std::collections::VecDeque;

use mazewright_core::{CellKind, Coord};
use mazewright_grid::Grid;
use rand::Rng;

use crate::lattice::{carve, CellMask};

const STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Probability that [`carve_guaranteed_path`] steps straight toward the
/// target instead of taking a random orthogonal step.
pub const DIRECT_STEP_PROBABILITY: f64 = 0.7;

/// Whether `start` can reach `end` through non-Wall cells.
pub fn is_solvable(grid: &Grid, start: Coord, end: Coord) -> bool {
    grid.is_solvable(start, end)
}

/// Breadth-first search outward from `from`, passing through Wall cells
/// only, for the nearest Empty cell. `from` itself is never returned.
pub fn find_nearest_empty(grid: &Grid, from: Coord) -> Option<Coord> {
    let mut seen = CellMask::new(grid.size());
    seen.insert(from);
    let mut queue = VecDeque::from([from]);
    while let Some(here) = queue.pop_front() {
        for &(dr, dc) in &STEPS {
            let next = here.offset(dr, dc);
            if !grid.contains(next) || !seen.insert(next) {
                continue;
            }
            match grid.cell(next) {
                Some(CellKind::Empty) => return Some(next),
                Some(CellKind::Wall) => queue.push_back(next),
                _ => {}
            }
        }
    }
    None
}

/// Open a straight L-shaped corridor from `from` to `to`: rows first,
/// then columns. Returns the number of cells that changed.
pub fn carve_path_between(grid: &mut Grid, from: Coord, to: Coord) -> usize {
    let mut here = from;
    let mut carved = 0;
    loop {
        carved += usize::from(carve(grid, here));
        if here == to {
            return carved;
        }
        here = step_toward(here, to);
    }
}

/// Make sure `end` touches at least one open cell.
///
/// If `end` is not a Wall and already has a non-Wall neighbour, nothing
/// happens. Otherwise `end` is opened and joined to the nearest Empty
/// cell by [`carve_path_between`]. Returns whether the grid changed.
pub fn ensure_end_connected(grid: &mut Grid, end: Coord) -> bool {
    let open = grid.cell(end).is_some_and(CellKind::is_traversable);
    if open && !grid.neighbours(end).is_empty() {
        return false;
    }
    let mut changed = carve(grid, end);
    if let Some(nearest) = find_nearest_empty(grid, end) {
        changed |= carve_path_between(grid, end, nearest) > 0;
    }
    changed
}

/// Carve a biased random walk from `start` to `end`.
///
/// With probability [`DIRECT_STEP_PROBABILITY`] each move closes the row
/// gap first, then the column gap; otherwise it moves one random
/// orthogonal step if that stays in bounds. Every cell the walk leaves
/// is opened, then `end`. The walk always terminates at `end`, but the
/// corridor it leaves is neither minimal nor loop-free. Out-of-grid
/// endpoints carve nothing.
pub fn carve_guaranteed_path<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    rng: &mut R,
) -> usize {
    if !grid.contains(start) || !grid.contains(end) {
        return 0;
    }
    let mut here = start;
    let mut carved = 0;
    while here != end {
        carved += usize::from(carve(grid, here));
        if rng.random_bool(DIRECT_STEP_PROBABILITY) {
            here = step_toward(here, end);
        } else {
            let (dr, dc) = STEPS[rng.random_range(0..STEPS.len())];
            let next = here.offset(dr, dc);
            if grid.contains(next) {
                here = next;
            }
        }
    }
    carved + usize::from(carve(grid, end))
}

/// Whether `coord` lies in the 3×3 block centred on `center`.
pub fn in_protected_region(coord: Coord, center: Coord) -> bool {
    (coord.row - center.row).abs() <= 1 && (coord.col - center.col).abs() <= 1
}

/// Open every interior Wall cell in the 3×3 block around `center`. The
/// outer border is left alone. Returns the number of cells opened.
pub fn clear_protected_region(grid: &mut Grid, center: Coord) -> usize {
    let mut cleared = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            let coord = center.offset(dr, dc);
            if grid.is_interior(coord) && grid.is(coord, CellKind::Wall) {
                cleared += usize::from(grid.set_cell(coord, CellKind::Empty));
            }
        }
    }
    cleared
}

fn step_toward(here: Coord, to: Coord) -> Coord {
    if here.row != to.row {
        here.offset((to.row - here.row).signum(), 0)
    } else {
        here.offset(0, (to.col - here.col).signum())
    }
}
