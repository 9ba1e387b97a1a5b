//! The square cell grid every Mazewright algorithm mutates.
//!
//! [`Grid`] owns the cell states and the per-cell visit counters. It is
//! a plain value: processes that must diverge take a deep clone, so no
//! two running algorithms ever share a grid.
//!
//! Alongside the data model this crate provides the primitive mutators
//! ([`Grid::generate_walls`], [`Grid::random_start_end`]), the
//! breadth-first reachability test behind [`Grid::is_solvable`], and
//! ASCII rendering/parsing for fixtures and debugging.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod corner;
pub mod grid;
pub mod reach;
pub mod render;

pub use corner::Corner;
pub use grid::Grid;
