//! Maze generation for Mazewright.
//!
//! Perfect mazes are carved on the lattice of odd interior cells, so
//! every corridor is one cell wide and every wall one cell thick. Three
//! carvers are available ([`Backtracker`], [`Prim`], [`Wilson`]), each
//! a state machine that carves one cell per step. [`Carver`] dispatches
//! by [`MazeAlgorithm`](mazewright_core::MazeAlgorithm).
//!
//! The full generation pipeline, with protected start/end regions,
//! markers and connectivity repair, is [`MazePipeline`]. It runs either
//! observably as the [`PerfectMaze`] process or in one call through
//! [`generate_perfect_maze`].
//!
//! [`DensityMaze`] builds multi-route mazes at a target wall density.
//! The [`repair`] module holds the helpers both pipelines use to
//! guarantee that the end is reachable.
//!
//! Every random choice draws from a caller-supplied [`rand::Rng`], so a
//! seeded source reproduces the same maze.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backtrack;
pub mod carver;
pub mod density;
pub mod lattice;
pub mod perfect;
pub mod prim;
pub mod repair;
pub mod wilson;

pub use backtrack::Backtracker;
pub use carver::{carve_maze, Carver};
pub use density::{DensityMaze, DensityOutcome};
pub use perfect::{generate_perfect_maze, MazePipeline, PerfectMaze};
pub use prim::Prim;
pub use wilson::Wilson;
