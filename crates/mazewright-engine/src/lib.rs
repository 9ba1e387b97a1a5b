//! Paced execution, races, and board construction for Mazewright.
//!
//! Processes from `mazewright-search` and `mazewright-maze` never sleep
//! or block; this crate decides when they step. Every driver runs on
//! the calling thread and interleaves its lanes cooperatively, one step
//! per lane per round:
//!
//! - [`Runner`] drives a single process.
//! - [`Race`] drives up to [`MAX_LANES`] searches on copies of one grid
//!   and names the first to finish with a solution as the winner.
//! - [`MazeRace`] drives the three maze generators side by side.
//!
//! All three honour a shared [`RunControl`] (pause, resume, cancel),
//! follow a [`PacingConfig`], return [`RunMetrics`], and can publish
//! [`RunEvent`]s over a crossbeam channel.
//!
//! [`Board`] is the construction boundary: it validates a
//! [`BoardConfig`] and produces a solvable grid with Start and End
//! stamped, in one call or as an observable process.
//!
//! Enable the `tracing` feature to get a span per run and a log line
//! per lane completion or failure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod control;
pub mod event;
pub mod lane;
pub mod maze_race;
pub mod metrics;
pub mod race;
pub mod runner;

pub use board::{Board, BoardBuild};
pub use config::{
    BoardConfig, ConfigError, PacingConfig, MAX_GRID_SIZE, MAX_LANES, MAZE_SNAPSHOT_EVERY,
    MIN_GRID_SIZE,
};
pub use control::{RunControl, RunState};
pub use event::RunEvent;
pub use lane::{LaneReport, Outcome};
pub use maze_race::{MazeRace, MazeRaceReport};
pub use metrics::RunMetrics;
pub use race::{Race, RaceReport};
pub use runner::{RunReport, Runner};
