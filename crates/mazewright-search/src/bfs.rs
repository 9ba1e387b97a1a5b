//! Breadth-first search.

use std::collections::VecDeque;

use indexmap::IndexSet;
use mazewright_core::{Coord, Path, ProcessError, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::{PathTrace, Process, Step, Trail, TrailId};

use crate::{finished, mark_visited, prepare};

const ALGORITHM: SearchAlgorithm = SearchAlgorithm::Bfs;

enum Phase {
    Searching,
    Tracing(PathTrace),
    Finished,
}

/// Breadth-first search from `start` to `end`.
///
/// Cells are marked visited-on-enqueue, so each cell enters the queue
/// at most once. The first time `end` is dequeued its route is a
/// shortest one.
pub struct Bfs {
    grid: Grid,
    end: Coord,
    trail: Trail,
    queue: VecDeque<TrailId>,
    seen: IndexSet<Coord>,
    phase: Phase,
    result: Option<Path>,
}

impl Bfs {
    /// Prepare a search over `grid`. Fails if either endpoint is
    /// outside the grid.
    pub fn new(mut grid: Grid, start: Coord, end: Coord) -> Result<Self, ProcessError> {
        prepare(ALGORITHM, &mut grid, start, end)?;
        let mut trail = Trail::new();
        let root = trail.root(start);
        let mut seen = IndexSet::new();
        seen.insert(start);
        Ok(Self {
            grid,
            end,
            trail,
            queue: VecDeque::from([root]),
            seen,
            phase: Phase::Searching,
            result: None,
        })
    }

    fn finish(&mut self, path: Option<Path>) -> Step {
        self.phase = Phase::Finished;
        self.result.clone_from(&path);
        Step::Done(path)
    }
}

impl Process for Bfs {
    fn name(&self) -> &str {
        ALGORITHM.name()
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        loop {
            match &mut self.phase {
                Phase::Searching => {
                    let Some(id) = self.queue.pop_front() else {
                        return Ok(self.finish(None));
                    };
                    let here = self.trail.head(id);
                    let marked = mark_visited(&mut self.grid, here);
                    if here == self.end {
                        self.phase = Phase::Tracing(PathTrace::new(self.trail.path(id)));
                    } else {
                        for next in self.grid.neighbours(here) {
                            if self.seen.insert(next) {
                                let child = self.trail.extend(id, next);
                                self.queue.push_back(child);
                            }
                        }
                    }
                    if marked {
                        return Ok(Step::Continue);
                    }
                }
                Phase::Tracing(trace) => {
                    if trace.advance(&mut self.grid) {
                        return Ok(Step::Continue);
                    }
                    let path = trace.path().clone();
                    return Ok(self.finish(Some(path)));
                }
                Phase::Finished => return Err(finished(ALGORITHM)),
            }
        }
    }

    fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    fn result(&self) -> Option<&Path> {
        self.result.as_ref()
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn into_grid(self: Box<Self>) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_core::CellKind;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn detour() -> (Grid, Coord, Coord) {
        let grid = Grid::parse(
            "
            .....
            .S.#.
            ..#..
            .#.E.
            .....
            ",
        )
        .unwrap();
        (grid, c(1, 1), c(3, 3))
    }

    #[test]
    fn detour_around_blocked_diagonal() {
        // (2,2), (1,3) and (3,1) cut every monotone route, so the
        // shortest route swings out to the border: 8 moves, 9 cells.
        let (grid, start, end) = detour();
        let mut bfs = Bfs::new(grid, start, end).unwrap();
        let path = bfs.run_to_end().unwrap().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
        assert_eq!(bfs.grid().count(CellKind::Path), 7);
        assert_eq!(bfs.result(), Some(&path));
    }

    #[test]
    fn single_blocker_leaves_a_manhattan_route() {
        let mut grid = Grid::new(5).unwrap();
        grid.stamp_endpoints(c(1, 1), c(3, 3));
        grid.set_cell(c(2, 2), CellKind::Wall);
        let mut bfs = Bfs::new(grid, c(1, 1), c(3, 3)).unwrap();
        let path = bfs.run_to_end().unwrap().unwrap();
        assert_eq!(path.len(), 5);
        // Up/down/left/right order: the route leaves (1,1) downward.
        assert_eq!(path[1], c(2, 1));
    }

    #[test]
    fn every_continue_changes_exactly_one_cell() {
        let (grid, start, end) = detour();
        let mut bfs = Bfs::new(grid, start, end).unwrap();
        let mut before = bfs.grid().clone();
        loop {
            let step = bfs.step().unwrap();
            let changed = before
                .iter()
                .zip(bfs.grid().iter())
                .filter(|(a, b)| a.1 != b.1)
                .count();
            match step {
                Step::Continue => assert_eq!(changed, 1),
                Step::Done(_) => {
                    assert_eq!(changed, 0);
                    break;
                }
            }
            before = bfs.grid().clone();
        }
    }

    #[test]
    fn start_equals_end_finishes_in_one_step() {
        let mut grid = Grid::new(3).unwrap();
        grid.set_cell(c(1, 1), CellKind::Start);
        let mut bfs = Bfs::new(grid, c(1, 1), c(1, 1)).unwrap();
        assert_eq!(bfs.step().unwrap(), Step::Done(Some(vec![c(1, 1)])));
        assert!(bfs.is_done());
    }

    #[test]
    fn unreachable_end_returns_none() {
        let grid = Grid::parse(
            "
            S#.
            ##.
            ..E
            ",
        )
        .unwrap();
        let mut bfs = Bfs::new(grid, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(bfs.run_to_end().unwrap(), None);
        assert!(bfs.result().is_none());
    }

    #[test]
    fn stepping_after_done_errors() {
        let grid = Grid::new(2).unwrap();
        let mut bfs = Bfs::new(grid, c(0, 0), c(1, 1)).unwrap();
        bfs.run_to_end().unwrap();
        assert!(matches!(
            bfs.step(),
            Err(ProcessError::AlreadyFinished { .. })
        ));
    }

    #[test]
    fn unmarked_start_is_visited() {
        let grid = Grid::new(3).unwrap();
        let mut bfs = Bfs::new(grid, c(0, 0), c(0, 1)).unwrap();
        assert_eq!(bfs.step().unwrap(), Step::Continue);
        assert_eq!(bfs.grid().cell(c(0, 0)), Some(CellKind::Visited));
    }
}
