//! Density-targeted mazes with multiple routes.
//!
//! The grid is opened completely from a seed cell, then walls are added
//! back one candidate at a time until a target density is reached. Each
//! tentative wall is kept only if the maze stays solvable. A final pass
//! reopens a few walls to create alternative routes.

use mazewright_core::{CellKind, Coord};
use mazewright_grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::lattice::{carve, CellMask};
use crate::repair::{carve_guaranteed_path, ensure_end_connected, in_protected_region};

/// Lowest accepted wall density.
pub const MIN_DENSITY: f64 = 0.1;
/// Highest accepted wall density.
pub const MAX_DENSITY: f64 = 0.9;
/// Probability that the extra-routes pass reopens a qualifying wall.
pub const EXTRA_ROUTE_PROBABILITY: f64 = 0.05;

const STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Builder for a density-targeted maze.
///
/// ```
/// use mazewright_core::Coord;
/// use mazewright_grid::Grid;
/// use mazewright_maze::DensityMaze;
/// use rand::SeedableRng;
///
/// let mut grid = Grid::new(15).unwrap();
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
/// let (start, end) = (Coord::new(1, 1), Coord::new(13, 13));
/// DensityMaze::new(0.4).endpoints(start, end).generate(&mut grid, &mut rng);
/// assert!(grid.is_solvable(start, end));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DensityMaze {
    /// Target fraction of Wall cells, clamped to
    /// [`MIN_DENSITY`]..=[`MAX_DENSITY`].
    pub density: f64,
    /// Run the extra-routes pass.
    pub allow_multiple_paths: bool,
    /// Start cell, kept open along with its 3×3 region.
    pub start: Option<Coord>,
    /// End cell, kept open along with its 3×3 region.
    pub end: Option<Coord>,
}

impl Default for DensityMaze {
    fn default() -> Self {
        Self {
            density: 0.3,
            allow_multiple_paths: true,
            start: None,
            end: None,
        }
    }
}

/// What a [`DensityMaze::generate`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DensityOutcome {
    /// Walls the add pass placed and kept.
    pub walls_added: usize,
    /// Walls reopened by the extra-routes pass.
    pub walls_reopened: usize,
    /// Times the guaranteed-path fallback had to run.
    pub repairs: usize,
}

impl DensityMaze {
    /// A builder targeting `density` with the extra-routes pass enabled.
    pub fn new(density: f64) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// Protect and connect `start` and `end`.
    pub fn endpoints(mut self, start: Coord, end: Coord) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Enable or disable the extra-routes pass.
    pub fn multiple_paths(mut self, allow: bool) -> Self {
        self.allow_multiple_paths = allow;
        self
    }

    /// The density actually targeted. NaN clamps to [`MIN_DENSITY`].
    pub fn effective_density(&self) -> f64 {
        self.density.max(MIN_DENSITY).min(MAX_DENSITY)
    }

    /// Rebuild `grid` as a density maze. Start/End markers are not
    /// stamped; both endpoints are left Empty.
    pub fn generate<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> DensityOutcome {
        let density = self.effective_density();
        let mut outcome = DensityOutcome::default();

        grid.reset();
        grid.fill(CellKind::Wall);
        for coord in [self.start, self.end].into_iter().flatten() {
            grid.set_cell(coord, CellKind::Empty);
        }

        let seed = match self.start {
            Some(start) => start,
            None => near_corner(grid.size(), rng),
        };
        open_from(grid, seed, rng);
        if let Some(end) = self.end {
            ensure_end_connected(grid, end);
        }

        let target = (grid.cell_count() as f64 * density).floor() as usize;
        let budget = target.saturating_sub(grid.count(CellKind::Wall));
        outcome.walls_added = self.add_walls(grid, budget, density, rng);

        outcome.repairs += self.repair(grid, rng);
        if self.allow_multiple_paths {
            outcome.walls_reopened = reopen_walls(grid, rng);
        }
        outcome.repairs += self.repair(grid, rng);
        outcome
    }

    fn protected(&self, coord: Coord) -> bool {
        [self.start, self.end]
            .into_iter()
            .flatten()
            .any(|center| in_protected_region(coord, center))
    }

    fn add_walls<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        budget: usize,
        density: f64,
        rng: &mut R,
    ) -> usize {
        let size = grid.size() as i32;
        let mut candidates: Vec<Coord> = grid
            .iter()
            .filter(|&(coord, kind)| kind == CellKind::Empty && !self.protected(coord))
            .map(|(coord, _)| coord)
            .collect();
        candidates.shuffle(rng);

        let dense = density > 0.6;
        let min_empty = (grid.cell_count() as f64 * (1.0 - density) * 0.8).floor() as usize;
        let max_attempts = budget.saturating_mul(10);
        let mut added = 0;

        for (attempt, coord) in candidates.into_iter().enumerate() {
            if added >= budget || attempt >= max_attempts {
                break;
            }
            let empty_neighbours = STEPS
                .iter()
                .filter(|&&(dr, dc)| grid.is(coord.offset(dr, dc), CellKind::Empty))
                .count();
            let edge = coord.row == 0
                || coord.col == 0
                || coord.row == size - 1
                || coord.col == size - 1;
            let (threshold, probability) = match (edge, dense) {
                (true, true) => (1, 0.9),
                (true, false) => (2, 0.7),
                (false, true) => (2, 0.8),
                (false, false) => (3, 0.5),
            };
            if empty_neighbours < threshold || !rng.random_bool(probability) {
                continue;
            }

            grid.set_cell(coord, CellKind::Wall);
            let keep = match (self.start, self.end) {
                (Some(start), Some(end)) => grid.is_solvable(start, end),
                _ => grid.count(CellKind::Empty) >= min_empty,
            };
            if keep {
                added += 1;
            } else {
                grid.set_cell(coord, CellKind::Empty);
            }
        }
        added
    }

    fn repair<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> usize {
        match (self.start, self.end) {
            (Some(start), Some(end)) if !grid.is_solvable(start, end) => {
                carve_guaranteed_path(grid, start, end, rng);
                1
            }
            _ => 0,
        }
    }
}

/// A random cell within three rows and three columns of some corner.
fn near_corner<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Coord {
    let size = size as i32;
    let pick = |rng: &mut R| {
        let offset = rng.random_range(0..3);
        let base = if rng.random_bool(0.5) { 0 } else { (size - 3).max(0) };
        (base + offset).min(size - 1)
    };
    let row = pick(&mut *rng);
    let col = pick(&mut *rng);
    Coord::new(row, col)
}

/// Randomized depth-first opening of every Wall cell connected to `seed`
/// through Wall cells.
fn open_from<R: Rng + ?Sized>(grid: &mut Grid, seed: Coord, rng: &mut R) {
    let mut visited = CellMask::new(grid.size());
    let mut stack = vec![seed];
    while let Some(here) = stack.pop() {
        if !visited.insert(here) {
            continue;
        }
        carve(grid, here);
        let mut next: Vec<Coord> = STEPS
            .iter()
            .map(|&(dr, dc)| here.offset(dr, dc))
            .filter(|&n| !visited.get(n) && grid.is(n, CellKind::Wall))
            .collect();
        next.shuffle(rng);
        stack.extend(next);
    }
}

/// Reopen interior walls that touch an Empty cell, each with
/// probability [`EXTRA_ROUTE_PROBABILITY`]. Cells opened earlier in the
/// sweep count as Empty for later ones.
fn reopen_walls<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut reopened = 0;
    let interior: Vec<Coord> = grid.coords().filter(|&c| grid.is_interior(c)).collect();
    for coord in interior {
        if !grid.is(coord, CellKind::Wall) {
            continue;
        }
        let touches_empty = STEPS
            .iter()
            .any(|&(dr, dc)| grid.is(coord.offset(dr, dc), CellKind::Empty));
        if touches_empty && rng.random_bool(EXTRA_ROUTE_PROBABILITY) {
            grid.set_cell(coord, CellKind::Empty);
            reopened += 1;
        }
    }
    reopened
}
