//! The [`Process`] trait and its [`Step`] result.

use mazewright_core::{Path, ProcessError};
use mazewright_grid::Grid;

/// Outcome of one [`Process::step`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// One grid mutation happened; more may follow.
    Continue,
    /// The process finished. Carries the found route, or `None` when
    /// there is no route or the result lives in the grid itself.
    Done(Option<Path>),
}

impl Step {
    /// Whether this is a terminal step.
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

/// A resumable computation over a privately owned grid.
///
/// # Contract
///
/// - Each `step()` that returns [`Step::Continue`] has applied exactly
///   one observable grid mutation (or a small fixed batch).
/// - The terminal `step()` returns [`Step::Done`]; after that,
///   [`is_done`](Process::is_done) is `true` and further `step()` calls
///   return [`ProcessError::AlreadyFinished`].
/// - A process never blocks or sleeps. Pacing belongs to the driver.
///
/// # Object safety
///
/// This trait is object-safe; drivers hold processes as
/// `Box<dyn Process>`.
///
/// # Examples
///
/// A process that walls off cells one per step along the top row:
///
/// ```
/// use mazewright_core::{CellKind, Coord, Path, ProcessError};
/// use mazewright_grid::Grid;
/// use mazewright_process::{Process, Step};
///
/// struct TopRowWaller { grid: Grid, col: i32, done: bool }
///
/// impl Process for TopRowWaller {
///     fn name(&self) -> &str { "top-row" }
///     fn step(&mut self) -> Result<Step, ProcessError> {
///         if self.done {
///             return Err(ProcessError::AlreadyFinished { name: self.name().into() });
///         }
///         if self.grid.set_cell(Coord::new(0, self.col), CellKind::Wall) {
///             self.col += 1;
///             return Ok(Step::Continue);
///         }
///         self.done = true;
///         Ok(Step::Done(None))
///     }
///     fn is_done(&self) -> bool { self.done }
///     fn result(&self) -> Option<&Path> { None }
///     fn grid(&self) -> &Grid { &self.grid }
///     fn into_grid(self: Box<Self>) -> Grid { self.grid }
/// }
///
/// let mut p = TopRowWaller { grid: Grid::new(3).unwrap(), col: 0, done: false };
/// assert_eq!(p.run_to_end().unwrap(), None);
/// assert_eq!(p.grid().count(CellKind::Wall), 3);
/// ```
pub trait Process: Send {
    /// Human-readable name used in events, reports, and errors.
    fn name(&self) -> &str;

    /// Apply the next atomic mutation.
    fn step(&mut self) -> Result<Step, ProcessError>;

    /// Whether the terminal step has been taken.
    fn is_done(&self) -> bool;

    /// The route returned by the terminal step, if any.
    fn result(&self) -> Option<&Path>;

    /// The grid as mutated so far.
    fn grid(&self) -> &Grid;

    /// Consume the process and hand back its grid.
    fn into_grid(self: Box<Self>) -> Grid;

    /// `true` when success is read from the grid (Path cells) instead
    /// of from a returned route.
    fn solution_in_grid(&self) -> bool {
        false
    }

    /// Drive the process to completion without observation.
    ///
    /// This is the batch form of any stepwise process.
    fn run_to_end(&mut self) -> Result<Option<Path>, ProcessError> {
        loop {
            if let Step::Done(path) = self.step()? {
                return Ok(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_core::{CellKind, Coord};

    /// Marks the diagonal, one cell per step.
    struct Diagonal {
        grid: Grid,
        next: i32,
        done: bool,
    }

    impl Process for Diagonal {
        fn name(&self) -> &str {
            "diagonal"
        }

        fn step(&mut self) -> Result<Step, ProcessError> {
            if self.done {
                return Err(ProcessError::AlreadyFinished {
                    name: self.name().to_string(),
                });
            }
            let c = Coord::new(self.next, self.next);
            if self.grid.set_cell(c, CellKind::Visited) {
                self.next += 1;
                Ok(Step::Continue)
            } else {
                self.done = true;
                Ok(Step::Done(None))
            }
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

    fn diagonal(size: usize) -> Box<dyn Process> {
        Box::new(Diagonal {
            grid: Grid::new(size).unwrap(),
            next: 0,
            done: false,
        })
    }

    #[test]
    fn one_mutation_per_step() {
        let mut p = diagonal(4);
        for expected in 1..=4 {
            assert_eq!(p.step().unwrap(), Step::Continue);
            assert_eq!(p.grid().count(CellKind::Visited), expected);
        }
        assert_eq!(p.step().unwrap(), Step::Done(None));
        assert!(p.is_done());
    }

    #[test]
    fn step_after_done_errors() {
        let mut p = diagonal(1);
        p.run_to_end().unwrap();
        assert!(matches!(
            p.step(),
            Err(ProcessError::AlreadyFinished { .. })
        ));
    }

    #[test]
    fn into_grid_returns_mutations() {
        let mut p = diagonal(3);
        p.run_to_end().unwrap();
        let grid = p.into_grid();
        assert_eq!(grid.count(CellKind::Visited), 3);
    }

    #[test]
    fn default_solution_is_not_grid_encoded() {
        assert!(!diagonal(2).solution_in_grid());
    }

    #[test]
    fn step_is_done() {
        assert!(Step::Done(None).is_done());
        assert!(!Step::Continue.is_done());
    }
}
