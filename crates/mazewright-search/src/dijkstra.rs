//! Dijkstra's algorithm with unit edge costs.

use indexmap::{IndexMap, IndexSet};
use mazewright_core::{Coord, Path, ProcessError, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::{PathTrace, Process, Step, Trail, TrailId};

use crate::frontier::PriorityFrontier;
use crate::{finished, mark_visited, prepare};

const ALGORITHM: SearchAlgorithm = SearchAlgorithm::Dijkstra;

enum Phase {
    Searching,
    Tracing(PathTrace),
    Finished,
}

/// Dijkstra's algorithm from `start` to `end`.
///
/// A neighbour is (re)queued whenever its distance improves; entries
/// whose distance exceeds the best known one are skipped on pop, and a
/// cell is marked Visited only on its first settled pop. With unit
/// costs this settles cells in BFS order.
pub struct Dijkstra {
    grid: Grid,
    end: Coord,
    trail: Trail,
    frontier: PriorityFrontier,
    best: IndexMap<Coord, u32>,
    settled: IndexSet<Coord>,
    phase: Phase,
    result: Option<Path>,
}

impl Dijkstra {
    /// Prepare a search over `grid`. Fails if either endpoint is
    /// outside the grid.
    pub fn new(mut grid: Grid, start: Coord, end: Coord) -> Result<Self, ProcessError> {
        prepare(ALGORITHM, &mut grid, start, end)?;
        let mut trail = Trail::new();
        let root = trail.root(start);
        let mut frontier = PriorityFrontier::default();
        frontier.push(0, root);
        let mut best = IndexMap::new();
        best.insert(start, 0);
        Ok(Self {
            grid,
            end,
            trail,
            frontier,
            best,
            settled: IndexSet::new(),
            phase: Phase::Searching,
            result: None,
        })
    }

    fn distance(&self, id: TrailId) -> u32 {
        (self.trail.route_len(id) - 1) as u32
    }

    fn finish(&mut self, path: Option<Path>) -> Step {
        self.phase = Phase::Finished;
        self.result.clone_from(&path);
        Step::Done(path)
    }
}

impl Process for Dijkstra {
    fn name(&self) -> &str {
        ALGORITHM.name()
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        loop {
            match &mut self.phase {
                Phase::Searching => {
                    let Some(id) = self.frontier.pop() else {
                        return Ok(self.finish(None));
                    };
                    let here = self.trail.head(id);
                    let dist = self.distance(id);
                    if self.best.get(&here).is_some_and(|&b| dist > b) {
                        continue;
                    }
                    let marked =
                        self.settled.insert(here) && mark_visited(&mut self.grid, here);
                    if here == self.end {
                        self.phase = Phase::Tracing(PathTrace::new(self.trail.path(id)));
                    } else {
                        let next_dist = dist + 1;
                        for next in self.grid.neighbours(here) {
                            let improves = self.best.get(&next).is_none_or(|&b| next_dist < b);
                            if improves {
                                self.best.insert(next, next_dist);
                                let child = self.trail.extend(id, next);
                                self.frontier.push(next_dist, child);
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
