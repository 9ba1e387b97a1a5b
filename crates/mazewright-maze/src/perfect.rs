//! The perfect-maze pipeline, stepwise and batch.
//!
//! Stages, each an observable step:
//!
//! 1. reset the grid and fill it with Wall (the border stays Wall for good);
//! 2. snap the start onto the room lattice and carve from there, one
//!    cell per step;
//! 3. clear the 3×3 region around the start, then around the end;
//! 4. stamp the Start marker, then the End marker and repair End
//!    connectivity;
//! 5. if the end is still unreachable, carve a guaranteed path.

use mazewright_core::{CellKind, Coord, MazeAlgorithm, Path, ProcessError};
use mazewright_grid::Grid;
use mazewright_process::{Process, Step};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::carver::Carver;
use crate::lattice::seed_room;
use crate::repair::{carve_guaranteed_path, clear_protected_region, ensure_end_connected};

enum Stage {
    Fill,
    Seed,
    Carve(Carver),
    ClearStart,
    ClearEnd,
    MarkStart,
    MarkEnd,
    Verify,
    Finished,
}

/// The perfect-maze pipeline as a resumable state machine.
///
/// Like [`Carver`], the pipeline borrows its grid and random source per
/// call so that [`PerfectMaze`] and [`generate_perfect_maze`] share it.
pub struct MazePipeline {
    algorithm: MazeAlgorithm,
    start: Coord,
    end: Coord,
    stage: Stage,
}

impl MazePipeline {
    /// A pipeline that will build a maze between `start` and `end`.
    pub fn new(algorithm: MazeAlgorithm, start: Coord, end: Coord) -> Self {
        Self {
            algorithm,
            start,
            end,
            stage: Stage::Fill,
        }
    }

    /// The carving algorithm.
    pub fn algorithm(&self) -> MazeAlgorithm {
        self.algorithm
    }

    /// Whether every stage has run.
    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Finished)
    }

    /// Run until the grid changes. Returns `false` when the pipeline
    /// has finished and nothing changed.
    pub fn advance<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> bool {
        loop {
            let changed = match &mut self.stage {
                Stage::Fill => {
                    grid.reset();
                    grid.fill(CellKind::Wall);
                    self.stage = Stage::Seed;
                    true
                }
                Stage::Seed => {
                    self.stage = match seed_room(grid, self.start, rng) {
                        Some(seed) => Stage::Carve(Carver::new(self.algorithm, grid, seed)),
                        None => Stage::ClearStart,
                    };
                    false
                }
                Stage::Carve(carver) => {
                    if carver.step(grid, rng) {
                        true
                    } else {
                        self.stage = Stage::ClearStart;
                        false
                    }
                }
                Stage::ClearStart => {
                    self.stage = Stage::ClearEnd;
                    clear_protected_region(grid, self.start) > 0
                }
                Stage::ClearEnd => {
                    self.stage = Stage::MarkStart;
                    clear_protected_region(grid, self.end) > 0
                }
                Stage::MarkStart => {
                    self.stage = Stage::MarkEnd;
                    stamp(grid, self.start, CellKind::Start)
                }
                Stage::MarkEnd => {
                    self.stage = Stage::Verify;
                    let marked = stamp(grid, self.end, CellKind::End);
                    ensure_end_connected(grid, self.end) || marked
                }
                Stage::Verify => {
                    self.stage = Stage::Finished;
                    !grid.is_solvable(self.start, self.end)
                        && carve_guaranteed_path(grid, self.start, self.end, rng) > 0
                }
                Stage::Finished => return false,
            };
            if changed {
                return true;
            }
        }
    }
}

fn stamp(grid: &mut Grid, coord: Coord, kind: CellKind) -> bool {
    !grid.is(coord, kind) && grid.set_cell(coord, kind)
}

fn check_endpoints(
    algorithm: MazeAlgorithm,
    grid: &Grid,
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
    Ok(())
}

/// Build a perfect maze on `grid` in one call.
///
/// Runs the same stages as [`PerfectMaze`] without observation. On
/// return the grid holds the Start and End markers and `end` is
/// reachable from `start`.
///
/// ```
/// use mazewright_core::{Coord, MazeAlgorithm};
/// use mazewright_grid::Grid;
/// use mazewright_maze::generate_perfect_maze;
/// use rand::SeedableRng;
///
/// let mut grid = Grid::new(15).unwrap();
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
/// let (start, end) = (Coord::new(1, 1), Coord::new(13, 13));
/// generate_perfect_maze(&mut grid, MazeAlgorithm::Prims, start, end, &mut rng).unwrap();
/// assert!(grid.is_solvable(start, end));
/// ```
pub fn generate_perfect_maze<R: Rng + ?Sized>(
    grid: &mut Grid,
    algorithm: MazeAlgorithm,
    start: Coord,
    end: Coord,
    rng: &mut R,
) -> Result<(), ProcessError> {
    check_endpoints(algorithm, grid, start, end)?;
    let mut pipeline = MazePipeline::new(algorithm, start, end);
    while pipeline.advance(grid, rng) {}
    Ok(())
}

/// Observable perfect-maze generation over an owned grid.
///
/// Each [`step`](Process::step) applies one pipeline mutation; the last
/// returns `Done(None)` since a maze has no route result.
pub struct PerfectMaze<R = ChaCha8Rng> {
    grid: Grid,
    rng: R,
    pipeline: MazePipeline,
    done: bool,
}

impl<R: Rng + Send> PerfectMaze<R> {
    /// Prepare generation over `grid` using `rng`. Fails if either
    /// endpoint lies outside the grid.
    pub fn with_rng(
        grid: Grid,
        algorithm: MazeAlgorithm,
        start: Coord,
        end: Coord,
        rng: R,
    ) -> Result<Self, ProcessError> {
        check_endpoints(algorithm, &grid, start, end)?;
        Ok(Self {
            grid,
            rng,
            pipeline: MazePipeline::new(algorithm, start, end),
            done: false,
        })
    }
}

impl PerfectMaze<ChaCha8Rng> {
    /// Prepare generation with a ChaCha8 source seeded from `seed`.
    pub fn seeded(
        grid: Grid,
        algorithm: MazeAlgorithm,
        start: Coord,
        end: Coord,
        seed: u64,
    ) -> Result<Self, ProcessError> {
        Self::with_rng(grid, algorithm, start, end, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Process for PerfectMaze<R> {
    fn name(&self) -> &str {
        self.pipeline.algorithm().name()
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        if self.done {
            return Err(ProcessError::AlreadyFinished {
                name: self.name().to_string(),
            });
        }
        if self.pipeline.advance(&mut self.grid, &mut self.rng) {
            return Ok(Step::Continue);
        }
        self.done = true;
        Ok(Step::Done(None))
    }

    fn is_done(&self) -> bool {
        self.done
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
}
