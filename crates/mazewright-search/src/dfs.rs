//! Depth-first search.

use indexmap::IndexSet;
use mazewright_core::{Coord, Path, ProcessError, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::{PathTrace, Process, Step, Trail, TrailId};

use crate::{finished, mark_visited, prepare};

const ALGORITHM: SearchAlgorithm = SearchAlgorithm::Dfs;

enum Phase {
    Searching,
    Tracing(PathTrace),
    Finished,
}

/// Depth-first search from `start` to `end`.
///
/// Neighbours are pushed in reverse order so the first one (up) is
/// explored first. A cell is claimed when pushed and never pushed
/// again. Each pop bumps the cell's visit counter, which drives the
/// display weighting of backtracking.
pub struct Dfs {
    grid: Grid,
    end: Coord,
    trail: Trail,
    stack: Vec<TrailId>,
    seen: IndexSet<Coord>,
    phase: Phase,
    result: Option<Path>,
}

impl Dfs {
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
            stack: vec![root],
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

impl Process for Dfs {
    fn name(&self) -> &str {
        ALGORITHM.name()
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        loop {
            match &mut self.phase {
                Phase::Searching => {
                    let Some(id) = self.stack.pop() else {
                        return Ok(self.finish(None));
                    };
                    let here = self.trail.head(id);
                    self.grid.increment_visit_count(here);
                    let marked = mark_visited(&mut self.grid, here);
                    if here == self.end {
                        self.phase = Phase::Tracing(PathTrace::new(self.trail.path(id)));
                    } else {
                        for &next in self.grid.neighbours(here).iter().rev() {
                            if self.seen.insert(next) {
                                let child = self.trail.extend(id, next);
                                self.stack.push(child);
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
