//! Pacing and board configuration, validation, and error types.
//!
//! [`PacingConfig`] controls how a driver spaces out steps and how
//! often it publishes snapshots. [`BoardConfig`] describes the board
//! that [`Board::generate`](crate::Board::generate) builds. Both are
//! plain structs; `validate()` checks them before any work starts.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use mazewright_core::{Coord, GridError, MazeAlgorithm, MazeMode, ProcessError};

/// Smallest board side accepted at the boundary.
pub const MIN_GRID_SIZE: usize = 5;
/// Largest board side accepted at the boundary.
pub const MAX_GRID_SIZE: usize = 50;
/// Most searches a single comparison race can hold.
pub const MAX_LANES: usize = 6;
/// Snapshot stride used by maze-comparison races.
pub const MAZE_SNAPSHOT_EVERY: u32 = 3;

// ── PacingConfig ───────────────────────────────────────────────────

/// How a driver paces the processes it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacingConfig {
    /// Delay after each step that publishes a snapshot. Default: 30 ms.
    pub step_delay: Duration,
    /// Poll interval while paused. Default: 100 ms. Must be non-zero.
    pub pause_poll: Duration,
    /// Publish a snapshot every this many steps. Default: 1. Steps that
    /// publish nothing wait `step_delay / snapshot_every` instead.
    pub snapshot_every: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(30),
            pause_poll: Duration::from_millis(100),
            snapshot_every: 1,
        }
    }
}

impl PacingConfig {
    /// No delay between steps; a 1 ms pause poll. For tests and batch use.
    pub fn unpaced() -> Self {
        Self {
            step_delay: Duration::ZERO,
            pause_poll: Duration::from_millis(1),
            snapshot_every: 1,
        }
    }

    /// The default pacing with a snapshot every [`MAZE_SNAPSHOT_EVERY`]
    /// steps.
    pub fn maze_race() -> Self {
        Self {
            snapshot_every: MAZE_SNAPSHOT_EVERY,
            ..Self::default()
        }
    }

    /// Wait applied after a round that published no snapshot.
    pub fn idle_delay(&self) -> Duration {
        self.step_delay / self.snapshot_every.max(1)
    }

    /// Check the structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pause_poll.is_zero() {
            return Err(ConfigError::InvalidPacing {
                reason: "pause_poll must be non-zero".into(),
            });
        }
        if self.snapshot_every == 0 {
            return Err(ConfigError::InvalidPacing {
                reason: "snapshot_every must be at least 1".into(),
            });
        }
        Ok(())
    }
}

// ── BoardConfig ────────────────────────────────────────────────────

/// What kind of board to build.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// Side length, in [`MIN_GRID_SIZE`]..=[`MAX_GRID_SIZE`]. Default: 25.
    pub size: usize,
    /// Board mode. Default: [`MazeMode::MultiplePaths`].
    pub mode: MazeMode,
    /// Generator used in [`MazeMode::PerfectMaze`] mode. Default:
    /// [`MazeAlgorithm::RecursiveBacktracking`].
    pub maze_algorithm: MazeAlgorithm,
    /// Wall density for [`MazeMode::MultiplePaths`]. Default: 0.3.
    pub wall_density: f64,
    /// Random seed. `None` draws a fresh one per board.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 25,
            mode: MazeMode::default(),
            maze_algorithm: MazeAlgorithm::default(),
            wall_density: 0.3,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Check the structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size(self.size)?;
        if !self.wall_density.is_finite() || !(0.0..=1.0).contains(&self.wall_density) {
            return Err(ConfigError::InvalidDensity {
                value: self.wall_density,
            });
        }
        Ok(())
    }
}

pub(crate) fn check_size(size: usize) -> Result<(), ConfigError> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        return Err(ConfigError::GridSizeOutOfRange {
            size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected at the engine boundary, before any process runs.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Pacing invariant violated.
    InvalidPacing {
        /// Which invariant was violated.
        reason: String,
    },
    /// Board side outside the supported range.
    GridSizeOutOfRange {
        /// The requested size.
        size: usize,
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// Wall density not finite or outside `[0, 1]`.
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
    /// More race lanes than [`MAX_LANES`].
    TooManyLanes {
        /// Requested lane count.
        count: usize,
        /// Largest accepted lane count.
        max: usize,
    },
    /// A race was started with no lanes.
    NoLanes,
    /// Two race lanes share a name.
    DuplicateLane {
        /// The repeated name.
        name: String,
    },
    /// Start or end lies outside the grid.
    EndpointOutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: usize,
    },
    /// Grid construction failed.
    Grid(GridError),
    /// Process construction failed.
    Process(ProcessError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPacing { reason } => write!(f, "invalid pacing: {reason}"),
            Self::GridSizeOutOfRange { size, min, max } => {
                write!(f, "grid size {size} outside {min}..={max}")
            }
            Self::InvalidDensity { value } => {
                write!(f, "wall density must be finite and in [0, 1], got {value}")
            }
            Self::TooManyLanes { count, max } => {
                write!(f, "{count} race lanes requested, at most {max} allowed")
            }
            Self::NoLanes => write!(f, "race needs at least one lane"),
            Self::DuplicateLane { name } => write!(f, "race lane '{name}' appears twice"),
            Self::EndpointOutOfBounds { coord, size } => {
                write!(f, "endpoint {coord} outside {size}x{size} grid")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Process(e) => write!(f, "process: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Process(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ProcessError> for ConfigError {
    fn from(e: ProcessError) -> Self {
        Self::Process(e)
    }
}
