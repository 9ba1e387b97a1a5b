//! Board construction: a grid, a start, and an end, ready to search.

use mazewright_core::{Coord, MazeMode, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_maze::{generate_perfect_maze, DensityMaze, PerfectMaze};
use mazewright_process::Process;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{BoardConfig, ConfigError};

/// A generated board with Start and End stamped.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    /// The board's cells.
    pub grid: Grid,
    /// Start cell, holding the Start marker.
    pub start: Coord,
    /// End cell, holding the End marker.
    pub end: Coord,
}

/// A perfect maze still to be generated step by step.
pub struct BoardBuild {
    /// Where the Start marker will land.
    pub start: Coord,
    /// Where the End marker will land.
    pub end: Coord,
    /// The generation process. Its final grid is the board.
    pub process: Box<dyn Process>,
}

impl Board {
    /// Build a board as `config` describes, seeding from `config.seed`
    /// or from fresh entropy.
    ///
    /// ```
    /// use mazewright_core::MazeMode;
    /// use mazewright_engine::{Board, BoardConfig};
    ///
    /// let config = BoardConfig { size: 15, mode: MazeMode::PerfectMaze, seed: Some(7), ..BoardConfig::default() };
    /// let board = Board::generate(&config).unwrap();
    /// assert!(board.is_solvable());
    /// ```
    pub fn generate(config: &BoardConfig) -> Result<Self, ConfigError> {
        let mut rng = seeded_rng(config);
        Self::generate_with(config, &mut rng)
    }

    /// Build a board drawing every random choice from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(
        config: &BoardConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.size)?;
        let (start, end) = pick_endpoints(&grid, config, rng)?;
        match config.mode {
            MazeMode::OpenGrid => grid.reset(),
            MazeMode::PerfectMaze => {
                generate_perfect_maze(&mut grid, config.maze_algorithm, start, end, rng)?
            }
            MazeMode::MultiplePaths => {
                DensityMaze::new(config.wall_density)
                    .endpoints(start, end)
                    .generate(&mut grid, rng);
            }
        }
        grid.stamp_endpoints(start, end);
        Ok(Self { grid, start, end })
    }

    /// Prepare an observable perfect-maze build with
    /// `config.maze_algorithm`, whatever `config.mode` says.
    pub fn stepwise(config: &BoardConfig) -> Result<BoardBuild, ConfigError> {
        config.validate()?;
        let mut rng = seeded_rng(config);
        let grid = Grid::new(config.size)?;
        let (start, end) = pick_endpoints(&grid, config, &mut rng)?;
        let seed: u64 = rng.random();
        let maze = PerfectMaze::seeded(grid, config.maze_algorithm, start, end, seed)?;
        Ok(BoardBuild {
            start,
            end,
            process: Box::new(maze),
        })
    }

    /// Wrap a finished grid, e.g. the output of a [`BoardBuild`].
    pub fn from_parts(grid: Grid, start: Coord, end: Coord) -> Result<Self, ConfigError> {
        for coord in [start, end] {
            if !grid.contains(coord) {
                return Err(ConfigError::EndpointOutOfBounds {
                    coord,
                    size: grid.size(),
                });
            }
        }
        Ok(Self { grid, start, end })
    }

    /// Whether End is reachable from Start.
    pub fn is_solvable(&self) -> bool {
        self.grid.is_solvable(self.start, self.end)
    }

    /// A search over a copy of this board.
    pub fn search(&self, algorithm: SearchAlgorithm) -> Result<Box<dyn Process>, ConfigError> {
        Ok(mazewright_search::spawn(
            algorithm,
            self.grid.clone(),
            self.start,
            self.end,
        )?)
    }
}

fn seeded_rng(config: &BoardConfig) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(config.seed.unwrap_or_else(rand::random))
}

fn pick_endpoints<R: Rng + ?Sized>(
    grid: &Grid,
    config: &BoardConfig,
    rng: &mut R,
) -> Result<(Coord, Coord), ConfigError> {
    grid.random_start_end(rng)
        .ok_or(ConfigError::GridSizeOutOfRange {
            size: config.size,
            min: crate::MIN_GRID_SIZE,
            max: crate::MAX_GRID_SIZE,
        })
}
