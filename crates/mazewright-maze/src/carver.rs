//! One carver per [`MazeAlgorithm`], behind a single stepping interface.

use mazewright_core::{Coord, MazeAlgorithm};
use mazewright_grid::Grid;
use rand::Rng;

use crate::backtrack::Backtracker;
use crate::prim::Prim;
use crate::wilson::Wilson;

/// A perfect-maze carver for any [`MazeAlgorithm`].
///
/// Carvers borrow the grid and the random source on every step rather
/// than owning them, so the same machine backs both the stepwise
/// [`PerfectMaze`](crate::PerfectMaze) process and the batch
/// [`carve_maze`] call.
pub enum Carver {
    /// Depth-first recursive backtracking.
    Backtrack(Backtracker),
    /// Randomized Prim's.
    Prim(Prim),
    /// Wilson's loop-erased random walks.
    Wilson(Wilson),
}

impl Carver {
    /// A carver for `algorithm` rooted at `seed`.
    pub fn new(algorithm: MazeAlgorithm, grid: &Grid, seed: Coord) -> Self {
        match algorithm {
            MazeAlgorithm::RecursiveBacktracking => Carver::Backtrack(Backtracker::new(grid, seed)),
            MazeAlgorithm::Prims => Carver::Prim(Prim::new(grid, seed)),
            MazeAlgorithm::Wilsons => Carver::Wilson(Wilson::new(grid, seed)),
        }
    }

    /// The algorithm this carver runs.
    pub fn algorithm(&self) -> MazeAlgorithm {
        match self {
            Carver::Backtrack(_) => MazeAlgorithm::RecursiveBacktracking,
            Carver::Prim(_) => MazeAlgorithm::Prims,
            Carver::Wilson(_) => MazeAlgorithm::Wilsons,
        }
    }

    /// Carve one cell. Returns `false` when the carver is exhausted.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> bool {
        match self {
            Carver::Backtrack(c) => c.step(grid, rng),
            Carver::Prim(c) => c.step(grid, rng),
            Carver::Wilson(c) => c.step(grid, rng),
        }
    }
}

/// Carve a complete perfect maze on the room lattice of `grid`, starting
/// from `seed`. Returns the number of cells carved.
///
/// Only Wall cells change. The caller prepares the grid (normally all
/// Wall) beforehand.
pub fn carve_maze<R: Rng + ?Sized>(
    algorithm: MazeAlgorithm,
    grid: &mut Grid,
    seed: Coord,
    rng: &mut R,
) -> usize {
    let mut carver = Carver::new(algorithm, grid, seed);
    let mut carved = 0;
    while carver.step(grid, rng) {
        carved += 1;
    }
    carved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::rooms;
    use mazewright_core::CellKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_algorithm_spans_the_lattice() {
        for algorithm in MazeAlgorithm::ALL {
            let mut grid = Grid::new(15).unwrap();
            grid.fill(CellKind::Wall);
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            let carved = carve_maze(algorithm, &mut grid, Coord::new(7, 7), &mut rng);
            let rooms = rooms(&grid);
            assert_eq!(carved, 2 * rooms.len() - 1, "{algorithm}");
            for room in &rooms {
                assert!(grid.is_solvable(Coord::new(7, 7), *room), "{algorithm}");
            }
        }
    }

    #[test]
    fn carver_reports_its_algorithm() {
        let grid = Grid::new(5).unwrap();
        for algorithm in MazeAlgorithm::ALL {
            let carver = Carver::new(algorithm, &grid, Coord::new(1, 1));
            assert_eq!(carver.algorithm(), algorithm);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        for algorithm in MazeAlgorithm::ALL {
            let build = || {
                let mut grid = Grid::new(13).unwrap();
                grid.fill(CellKind::Wall);
                let mut rng = ChaCha8Rng::seed_from_u64(5);
                carve_maze(algorithm, &mut grid, Coord::new(1, 1), &mut rng);
                grid
            };
            assert_eq!(build(), build(), "{algorithm}");
        }
    }
}
