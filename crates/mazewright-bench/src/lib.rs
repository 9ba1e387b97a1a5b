//! Benchmark profiles and utilities for Mazewright.
//!
//! Provides pre-built boards for benchmarking and examples:
//!
//! - [`reference_board`]: 25×25 density maze, the default board
//! - [`perfect_board`]: 49×49 perfect maze from a chosen generator
//! - [`stress_board`]: 50×50 open grid, the widest search frontier

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mazewright_core::{MazeAlgorithm, MazeMode};
use mazewright_engine::{Board, BoardConfig, ConfigError};

/// Build the reference board: the default 25×25 multiple-paths board.
pub fn reference_board(seed: u64) -> Result<Board, ConfigError> {
    Board::generate(&BoardConfig {
        seed: Some(seed),
        ..BoardConfig::default()
    })
}

/// Build a 49×49 perfect maze with `algorithm`.
///
/// An odd side keeps the room lattice flush with the border.
pub fn perfect_board(algorithm: MazeAlgorithm, seed: u64) -> Result<Board, ConfigError> {
    Board::generate(&BoardConfig {
        size: 49,
        mode: MazeMode::PerfectMaze,
        maze_algorithm: algorithm,
        seed: Some(seed),
        ..BoardConfig::default()
    })
}

/// Build the largest open board.
pub fn stress_board(seed: u64) -> Result<Board, ConfigError> {
    Board::generate(&BoardConfig {
        size: mazewright_engine::MAX_GRID_SIZE,
        mode: MazeMode::OpenGrid,
        seed: Some(seed),
        ..BoardConfig::default()
    })
}
