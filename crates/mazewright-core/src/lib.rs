//! Core types for the Mazewright grid search and maze generation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace:
//! coordinates, cell states, algorithm and mode names, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod cell;
pub mod coord;
pub mod error;

pub use algorithm::{MazeAlgorithm, MazeMode, SearchAlgorithm};
pub use cell::CellKind;
pub use coord::{Coord, Path};
pub use error::{GridError, ParseNameError, ProcessError};
