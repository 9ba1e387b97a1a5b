//! Breadth-first flood of the whole reachable region.

use std::collections::VecDeque;

use indexmap::IndexSet;
use mazewright_core::{Coord, Path, ProcessError, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::{PathTrace, Process, Step, Trail, TrailId};

use crate::{finished, mark_visited, prepare};

const ALGORITHM: SearchAlgorithm = SearchAlgorithm::FloodFill;

enum Phase {
    Flooding,
    Tracing(PathTrace),
    Finished,
}

/// Flood-fill from `start`.
///
/// Traverses exactly like [`Bfs`](crate::Bfs) but keeps going after
/// `end` is dequeued, so every cell of the start's component ends up
/// Visited. The route recorded on the first arrival at `end` is marked
/// once the queue drains.
pub struct FloodFill {
    grid: Grid,
    end: Coord,
    trail: Trail,
    queue: VecDeque<TrailId>,
    seen: IndexSet<Coord>,
    found: Option<TrailId>,
    phase: Phase,
    result: Option<Path>,
}

impl FloodFill {
    /// Prepare a flood over `grid`. Fails if either endpoint is
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
            found: None,
            phase: Phase::Flooding,
            result: None,
        })
    }

    /// Number of distinct cells reached so far, start included.
    pub fn reached(&self) -> usize {
        self.seen.len()
    }

    fn finish(&mut self, path: Option<Path>) -> Step {
        self.phase = Phase::Finished;
        self.result.clone_from(&path);
        Step::Done(path)
    }
}

impl Process for FloodFill {
    fn name(&self) -> &str {
        ALGORITHM.name()
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        loop {
            match &mut self.phase {
                Phase::Flooding => {
                    let Some(id) = self.queue.pop_front() else {
                        match self.found {
                            Some(found) => {
                                self.phase = Phase::Tracing(PathTrace::new(self.trail.path(found)));
                                continue;
                            }
                            None => return Ok(self.finish(None)),
                        }
                    };
                    let here = self.trail.head(id);
                    let marked = mark_visited(&mut self.grid, here);
                    if here == self.end && self.found.is_none() {
                        self.found = Some(id);
                    }
                    for next in self.grid.neighbours(here) {
                        if self.seen.insert(next) {
                            let child = self.trail.extend(id, next);
                            self.queue.push_back(child);
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
