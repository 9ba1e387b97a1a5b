//! Stepwise grid searches.
//!
//! Six algorithms, each an independent [`Process`] over a privately
//! owned [`Grid`]:
//!
//! | Type | Frontier | Stops at end | Result |
//! |------|----------|--------------|--------|
//! | [`Bfs`] | FIFO queue | yes | shortest route |
//! | [`Dfs`] | LIFO stack | yes | some route |
//! | [`Dijkstra`] | min-heap on distance | yes | shortest route |
//! | [`AStar`] | min-heap on `g + h` | yes | shortest route |
//! | [`FloodFill`] | FIFO queue | no | shortest route, after flooding |
//! | [`DeadEndFilling`] | none (grid scans) | n/a | marked in grid |
//!
//! Every dequeued cell that is not a Start/End marker becomes
//! [`Visited`](mazewright_core::CellKind::Visited) (one step each), then
//! the interior of the found route becomes
//! [`Path`](mazewright_core::CellKind::Path) (one step each). Neighbour
//! order is always up, down, left, right.
//!
//! Use [`spawn`] to build a boxed process from a [`SearchAlgorithm`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;
pub mod dead_end;
pub mod dfs;
pub mod dijkstra;
pub mod flood_fill;
mod frontier;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dead_end::DeadEndFilling;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use flood_fill::FloodFill;

use mazewright_core::{CellKind, Coord, ProcessError, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::Process;

/// Build a boxed search process for `algorithm` over `grid`.
///
/// The grid is taken by value; clone first to keep the original.
///
/// ```
/// use mazewright_core::{Coord, SearchAlgorithm};
/// use mazewright_grid::Grid;
/// use mazewright_search::spawn;
///
/// let grid = Grid::new(5).unwrap();
/// let mut search = spawn(SearchAlgorithm::AStar, grid, Coord::new(0, 0), Coord::new(4, 4)).unwrap();
/// let path = search.run_to_end().unwrap().unwrap();
/// assert_eq!(path.len(), 9);
/// ```
pub fn spawn(
    algorithm: SearchAlgorithm,
    grid: Grid,
    start: Coord,
    end: Coord,
) -> Result<Box<dyn Process>, ProcessError> {
    Ok(match algorithm {
        SearchAlgorithm::Bfs => Box::new(Bfs::new(grid, start, end)?),
        SearchAlgorithm::Dfs => Box::new(Dfs::new(grid, start, end)?),
        SearchAlgorithm::Dijkstra => Box::new(Dijkstra::new(grid, start, end)?),
        SearchAlgorithm::AStar => Box::new(AStar::new(grid, start, end)?),
        SearchAlgorithm::FloodFill => Box::new(FloodFill::new(grid, start, end)?),
        SearchAlgorithm::DeadEndFilling => Box::new(DeadEndFilling::new(grid, start, end)?),
    })
}

// ── Shared helpers ─────────────────────────────────────────────────

/// Reject endpoints outside the grid and zero the visit counters.
pub(crate) fn prepare(
    algorithm: SearchAlgorithm,
    grid: &mut Grid,
    start: Coord,
    end: Coord,
) -> Result<(), ProcessError> {
    for coord in [start, end] {
        if !grid.contains(coord) {
            return Err(ProcessError::InvalidEndpoint {
                name: algorithm.name().to_string(),
                coord,
                size: grid.size(),
            });
        }
    }
    grid.reset_visit_counts();
    Ok(())
}

/// Mark `coord` Visited unless it holds a Start/End marker. Returns
/// whether the grid changed.
pub(crate) fn mark_visited(grid: &mut Grid, coord: Coord) -> bool {
    match grid.cell(coord) {
        Some(kind) if !kind.is_endpoint() => grid.set_cell(coord, CellKind::Visited),
        _ => false,
    }
}

pub(crate) fn finished(algorithm: SearchAlgorithm) -> ProcessError {
    ProcessError::AlreadyFinished {
        name: algorithm.name().to_string(),
    }
}
