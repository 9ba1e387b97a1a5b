//! Error types, organized by subsystem: grid construction, stepwise
//! processes, and name parsing.
//!
//! Grid accessors deliberately never fail; probing past an edge reads
//! as `None` and writes as a no-op. These errors cover construction
//! and misuse at the library boundary only.

use std::error::Error;
use std::fmt;

use crate::coord::Coord;

/// Errors from constructing or parsing a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The requested size was zero.
    EmptyGrid,
    /// The requested size exceeds the supported maximum.
    SizeTooLarge {
        /// The requested size.
        size: usize,
        /// The largest accepted size.
        max: usize,
    },
    /// A coordinate lies outside the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: usize,
    },
    /// An ASCII grid contained a character with no cell mapping.
    UnknownGlyph {
        /// The unrecognised character.
        glyph: char,
        /// Row it appeared on.
        row: usize,
        /// Column it appeared in.
        col: usize,
    },
    /// An ASCII grid was not square.
    NotSquare {
        /// First row whose width differs from the row count.
        row: usize,
        /// Expected width (the number of rows).
        expected: usize,
        /// Actual width of that row.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid size must be at least 1"),
            Self::SizeTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum {max}")
            }
            Self::OutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} outside {size}x{size} grid")
            }
            Self::UnknownGlyph { glyph, row, col } => {
                write!(f, "unknown cell glyph '{glyph}' at row {row}, col {col}")
            }
            Self::NotSquare {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
        }
    }
}

impl Error for GridError {}

/// Errors from creating or stepping a stepwise process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessError {
    /// The process was given an endpoint outside its grid.
    InvalidEndpoint {
        /// Process name.
        name: String,
        /// The rejected coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: usize,
    },
    /// `step()` was called after the process already finished.
    AlreadyFinished {
        /// Process name.
        name: String,
    },
    /// The process could not make progress.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The process panicked mid-step; the driver captured the payload.
    Panicked {
        /// Process name.
        name: String,
        /// Panic message, if it was a string.
        message: String,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { name, coord, size } => {
                write!(f, "{name}: endpoint {coord} outside {size}x{size} grid")
            }
            Self::AlreadyFinished { name } => write!(f, "{name}: stepped after completion"),
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::Panicked { name, message } => write!(f, "{name}: panicked: {message}"),
        }
    }
}

impl Error for ProcessError {}

/// An algorithm or mode name that matches nothing known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNameError {
    /// What kind of name was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub name: String,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.name)
    }
}

impl Error for ParseNameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_messages() {
        assert_eq!(GridError::EmptyGrid.to_string(), "grid size must be at least 1");
        let err = GridError::OutOfBounds {
            coord: Coord::new(9, -1),
            size: 5,
        };
        assert_eq!(err.to_string(), "coordinate (9, -1) outside 5x5 grid");
    }

    #[test]
    fn process_error_names_the_process() {
        let err = ProcessError::AlreadyFinished { name: "BFS".into() };
        assert!(err.to_string().starts_with("BFS:"));
        let err = ProcessError::Panicked {
            name: "DFS".into(),
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "DFS: panicked: boom");
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: Error + Send + Sync + 'static>() {}
        assert_error::<GridError>();
        assert_error::<ProcessError>();
        assert_error::<ParseNameError>();
    }
}
