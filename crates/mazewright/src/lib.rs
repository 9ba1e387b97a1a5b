//! Mazewright: stepwise grid pathfinding and maze generation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Mazewright sub-crates. For most users, adding `mazewright`
//! as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use mazewright::prelude::*;
//!
//! let config = BoardConfig {
//!     size: 15,
//!     mode: MazeMode::PerfectMaze,
//!     seed: Some(1),
//!     ..BoardConfig::default()
//! };
//! let board = Board::generate(&config).unwrap();
//!
//! let race = Race::new(PacingConfig::unpaced()).unwrap();
//! let report = race
//!     .run(&board.grid, board.start, board.end, &SearchAlgorithm::ALL)
//!     .unwrap();
//! let bfs = report.lane("BFS").unwrap().path_len();
//! assert_eq!(report.lane("A*").unwrap().path_len(), bfs);
//! assert!(report.winner().is_some());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mazewright-core` | Coordinates, cell kinds, algorithm names, errors |
//! | [`grid`] | `mazewright-grid` | The `Grid` and its reachability queries |
//! | [`process`] | `mazewright-process` | The `Process` trait and path bookkeeping |
//! | [`maze`] | `mazewright-maze` | Maze generators and repair helpers |
//! | [`search`] | `mazewright-search` | The six searches |
//! | [`engine`] | `mazewright-engine` | Runner, races, boards, pacing and control |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared vocabulary (`mazewright-core`).
///
/// [`types::Coord`], [`types::CellKind`], the algorithm and mode enums,
/// and the error types.
pub use mazewright_core as types;

/// The square cell grid (`mazewright-grid`).
pub use mazewright_grid as grid;

/// Stepwise processes (`mazewright-process`).
///
/// [`process::Process`] is the contract every generator and search
/// implements.
pub use mazewright_process as process;

/// Maze generation (`mazewright-maze`).
///
/// Three carvers, the perfect-maze pipeline in stepwise and batch form,
/// the density maze, and the repair helpers.
pub use mazewright_maze as maze;

/// Searches (`mazewright-search`).
///
/// Build one by name with [`search::spawn`].
pub use mazewright_search as search;

/// Execution (`mazewright-engine`).
///
/// [`engine::Runner`] for a single paced run, [`engine::Race`] and
/// [`engine::MazeRace`] for side-by-side comparison, [`engine::Board`]
/// for board construction.
pub use mazewright_engine as engine;

/// Common imports for typical Mazewright usage.
///
/// ```rust
/// use mazewright::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mazewright_core::{CellKind, Coord, MazeAlgorithm, MazeMode, Path, SearchAlgorithm};

    // Errors
    pub use mazewright_core::{GridError, ParseNameError, ProcessError};

    // Grid and processes
    pub use mazewright_grid::Grid;
    pub use mazewright_process::{Process, Step};

    // Generation
    pub use mazewright_maze::{generate_perfect_maze, DensityMaze, PerfectMaze};

    // Engine
    pub use mazewright_engine::{
        Board, BoardConfig, ConfigError, LaneReport, MazeRace, Outcome, PacingConfig, Race,
        RaceReport, RunControl, RunEvent, RunMetrics, RunReport, RunState, Runner,
    };
}
