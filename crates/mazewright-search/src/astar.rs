//! A* with the Manhattan heuristic.

use indexmap::IndexMap;
use mazewright_core::{Coord, Path, ProcessError, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::{PathTrace, Process, Step, Trail, TrailId};

use crate::frontier::PriorityFrontier;
use crate::{finished, mark_visited, prepare};

const ALGORITHM: SearchAlgorithm = SearchAlgorithm::AStar;

enum Phase {
    Searching,
    Tracing(PathTrace),
    Finished,
}

/// A* search from `start` to `end`, ordered by `f = g + h` with `h`
/// the Manhattan distance to `end`.
///
/// On a 4-connected unit-cost grid the heuristic is admissible and
/// consistent, so the first pop of `end` carries a shortest route and
/// no cell is ever settled twice. Entries whose `g` exceeds the best
/// known `g` for their cell are skipped on pop.
pub struct AStar {
    grid: Grid,
    end: Coord,
    trail: Trail,
    frontier: PriorityFrontier,
    g_score: IndexMap<Coord, u32>,
    phase: Phase,
    result: Option<Path>,
    expanded: usize,
}

impl AStar {
    /// Prepare a search over `grid`. Fails if either endpoint is
    /// outside the grid.
    pub fn new(mut grid: Grid, start: Coord, end: Coord) -> Result<Self, ProcessError> {
        prepare(ALGORITHM, &mut grid, start, end)?;
        let mut trail = Trail::new();
        let root = trail.root(start);
        let mut frontier = PriorityFrontier::default();
        frontier.push(start.manhattan(end), root);
        let mut g_score = IndexMap::new();
        g_score.insert(start, 0);
        Ok(Self {
            grid,
            end,
            trail,
            frontier,
            g_score,
            phase: Phase::Searching,
            result: None,
            expanded: 0,
        })
    }

    /// Number of frontier entries expanded so far, stale entries
    /// excluded.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn finish(&mut self, path: Option<Path>) -> Step {
        self.phase = Phase::Finished;
        self.result.clone_from(&path);
        Step::Done(path)
    }
}

impl Process for AStar {
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
                    let g = (self.trail.route_len(id) - 1) as u32;
                    if self.g_score.get(&here).is_some_and(|&best| g > best) {
                        continue;
                    }
                    self.expanded += 1;
                    let marked = mark_visited(&mut self.grid, here);
                    if here == self.end {
                        self.phase = Phase::Tracing(PathTrace::new(self.trail.path(id)));
                    } else {
                        let next_g = g + 1;
                        for next in self.grid.neighbours(here) {
                            let improves = self.g_score.get(&next).is_none_or(|&b| next_g < b);
                            if improves {
                                self.g_score.insert(next, next_g);
                                let child = self.trail.extend(id, next);
                                self.frontier.push(next_g + next.manhattan(self.end), child);
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

    #[test]
    fn straight_line_expands_only_the_line() {
        let mut grid = Grid::new(9).unwrap();
        grid.stamp_endpoints(c(4, 0), c(4, 8));
        let mut a = AStar::new(grid, c(4, 0), c(4, 8)).unwrap();
        let path = a.run_to_end().unwrap().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(a.expanded(), 9);
        assert_eq!(a.grid().count(CellKind::Visited), 0);
        assert_eq!(a.grid().count(CellKind::Path), 7);
    }

    #[test]
    fn routes_around_a_wall() {
        let grid = Grid::parse(
            "
            .......
            ...#...
            ...#...
            .S.#.E.
            ...#...
            ...#...
            .......
            ",
        )
        .unwrap();
        let mut a = AStar::new(grid, c(3, 1), c(3, 5)).unwrap();
        let path = a.run_to_end().unwrap().unwrap();
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn unreachable_end_returns_none() {
        let grid = Grid::parse(
            "
            S.#.
            ..#.
            ###.
            ...E
            ",
        )
        .unwrap();
        let mut a = AStar::new(grid, c(0, 0), c(3, 3)).unwrap();
        assert_eq!(a.run_to_end().unwrap(), None);
        assert_eq!(a.expanded(), 4);
    }

    #[test]
    fn start_equals_end() {
        let mut grid = Grid::new(4).unwrap();
        grid.set_cell(c(2, 2), CellKind::Start);
        let mut a = AStar::new(grid, c(2, 2), c(2, 2)).unwrap();
        assert_eq!(a.step().unwrap(), Step::Done(Some(vec![c(2, 2)])));
        assert_eq!(a.expanded(), 1);
    }
}
