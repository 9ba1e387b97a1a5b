//! Dead-end filling.
//!
//! No frontier: the process scans the whole grid for cells with exactly
//! one open neighbour, fills every one found in that pass, and rescans
//! until a pass finds nothing. The Empty cells that survive are marked
//! as the solution. On a perfect maze that is exactly the start → end
//! corridor.

use mazewright_core::{CellKind, Coord, Path, ProcessError, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::{Process, Step};

use crate::{finished, prepare};

const ALGORITHM: SearchAlgorithm = SearchAlgorithm::DeadEndFilling;

enum Phase {
    Scanning,
    Filling { dead_ends: Vec<Coord>, next: usize },
    Revealing { next: usize },
    Finished,
}

/// Dead-end filling over the whole grid.
///
/// The endpoints only matter through their Start/End markers, which
/// are never filled. The process always finishes with `Done(None)`;
/// success is read from the grid as a non-zero
/// [`Path`](CellKind::Path) count (see [`solution_len`](Self::solution_len)).
pub struct DeadEndFilling {
    grid: Grid,
    phase: Phase,
    passes: usize,
}

impl DeadEndFilling {
    /// Prepare a fill over `grid`. Fails if either endpoint is outside
    /// the grid.
    pub fn new(mut grid: Grid, start: Coord, end: Coord) -> Result<Self, ProcessError> {
        prepare(ALGORITHM, &mut grid, start, end)?;
        Ok(Self {
            grid,
            phase: Phase::Scanning,
            passes: 0,
        })
    }

    /// Number of scan passes that found at least one dead end.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Number of cells currently marked as the surviving solution.
    pub fn solution_len(&self) -> usize {
        self.grid.count(CellKind::Path)
    }

    fn open_neighbours(&self, coord: Coord) -> usize {
        self.grid
            .neighbours(coord)
            .into_iter()
            .filter(|&n| !self.grid.is(n, CellKind::FilledDeadEnd))
            .count()
    }

    fn scan(&self) -> Vec<Coord> {
        self.grid
            .iter()
            .filter(|&(_, kind)| {
                !matches!(
                    kind,
                    CellKind::Wall | CellKind::FilledDeadEnd | CellKind::Start | CellKind::End
                )
            })
            .map(|(coord, _)| coord)
            .filter(|&coord| self.open_neighbours(coord) == 1)
            .collect()
    }
}

impl Process for DeadEndFilling {
    fn name(&self) -> &str {
        ALGORITHM.name()
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        loop {
            match &mut self.phase {
                Phase::Scanning => {
                    let dead_ends = self.scan();
                    if dead_ends.is_empty() {
                        self.phase = Phase::Revealing { next: 0 };
                    } else {
                        self.passes += 1;
                        self.phase = Phase::Filling { dead_ends, next: 0 };
                    }
                }
                Phase::Filling { dead_ends, next } => {
                    match dead_ends.get(*next) {
                        Some(&coord) => {
                            *next += 1;
                            self.grid.set_cell(coord, CellKind::FilledDeadEnd);
                            return Ok(Step::Continue);
                        }
                        None => self.phase = Phase::Scanning,
                    }
                }
                Phase::Revealing { next } => {
                    let found = self
                        .grid
                        .iter()
                        .skip(*next)
                        .position(|(_, kind)| kind == CellKind::Empty)
                        .map(|offset| *next + offset);
                    match found {
                        Some(index) => {
                            *next = index + 1;
                            let size = self.grid.size();
                            let coord = Coord::new((index / size) as i32, (index % size) as i32);
                            self.grid.set_cell(coord, CellKind::Path);
                            return Ok(Step::Continue);
                        }
                        None => {
                            self.phase = Phase::Finished;
                            return Ok(Step::Done(None));
                        }
                    }
                }
                Phase::Finished => return Err(finished(ALGORITHM)),
            }
        }
    }

    fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    fn result(&self) -> Option<&Path> {
        None
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn into_grid(self: Box<Self>) -> Grid {
        self.grid
    }

    fn solution_in_grid(&self) -> bool {
        true
    }
}
