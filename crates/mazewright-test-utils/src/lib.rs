//! Test utilities and mock processes for Mazewright development.
//!
//! [`fixtures`] holds small hand-drawn grids with known answers. The
//! mock processes here implement [`Process`] with fully predictable
//! behaviour so that driver tests can script completions, errors and
//! panics without depending on a real algorithm.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::time::Duration;

use crossbeam_channel::Receiver;
use mazewright_core::{CellKind, Coord, Path, ProcessError};
use mazewright_grid::Grid;
use mazewright_process::{Process, Step};

/// Side of the grid every mock process owns.
pub const MOCK_GRID_SIZE: usize = 5;

fn mock_grid() -> Grid {
    match Grid::new(MOCK_GRID_SIZE) {
        Ok(grid) => grid,
        Err(e) => panic!("mock grid: {e}"),
    }
}

/// Marks cell `n` (row-major, wrapping) as Visited.
fn mark(grid: &mut Grid, n: u64) {
    let size = grid.size() as u64;
    let i = n % (size * size);
    grid.set_cell(
        Coord::new((i / size) as i32, (i % size) as i32),
        CellKind::Visited,
    );
}

/// Takes a fixed number of `Continue` steps, then finishes with a
/// fixed result.
pub struct ScriptedProcess {
    name: String,
    grid: Grid,
    remaining: u64,
    taken: u64,
    path: Option<Path>,
    done: bool,
}

impl ScriptedProcess {
    pub fn new(name: &str, steps: u64, path: Option<Path>) -> Self {
        Self {
            name: name.to_string(),
            grid: mock_grid(),
            remaining: steps,
            taken: 0,
            path,
            done: false,
        }
    }
}

impl Process for ScriptedProcess {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        if self.done {
            return Err(ProcessError::AlreadyFinished {
                name: self.name.clone(),
            });
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            mark(&mut self.grid, self.taken);
            self.taken += 1;
            return Ok(Step::Continue);
        }
        self.done = true;
        Ok(Step::Done(self.path.clone()))
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn result(&self) -> Option<&Path> {
        if self.done {
            self.path.as_ref()
        } else {
            None
        }
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn into_grid(self: Box<Self>) -> Grid {
        self.grid
    }
}

/// Takes `after` `Continue` steps, then returns
/// [`ProcessError::ExecutionFailed`].
pub struct FailingProcess {
    inner: ScriptedProcess,
}

impl FailingProcess {
    pub fn new(name: &str, after: u64) -> Self {
        Self {
            inner: ScriptedProcess::new(name, after, None),
        }
    }
}

impl Process for FailingProcess {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        match self.inner.step()? {
            Step::Continue => Ok(Step::Continue),
            Step::Done(_) => Err(ProcessError::ExecutionFailed {
                reason: format!("{} gave up", self.inner.name),
            }),
        }
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn result(&self) -> Option<&Path> {
        None
    }

    fn grid(&self) -> &Grid {
        self.inner.grid()
    }

    fn into_grid(self: Box<Self>) -> Grid {
        self.inner.grid
    }
}

/// Takes `after` `Continue` steps, then panics with a message that
/// contains its name.
pub struct PanickingProcess {
    inner: ScriptedProcess,
}

impl PanickingProcess {
    pub fn new(name: &str, after: u64) -> Self {
        Self {
            inner: ScriptedProcess::new(name, after, None),
        }
    }
}

impl Process for PanickingProcess {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn step(&mut self) -> Result<Step, ProcessError> {
        match self.inner.step()? {
            Step::Continue => Ok(Step::Continue),
            Step::Done(_) => panic!("{} exploded", self.inner.name),
        }
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn result(&self) -> Option<&Path> {
        None
    }

    fn grid(&self) -> &Grid {
        self.inner.grid()
    }

    fn into_grid(self: Box<Self>) -> Grid {
        self.inner.grid
    }
}

/// Receive until every sender is gone, giving up after `timeout` of
/// silence.
pub fn drain<T>(rx: &Receiver<T>, timeout: Duration) -> Vec<T> {
    let mut out = Vec::new();
    while let Ok(item) = rx.recv_timeout(timeout) {
        out.push(item);
    }
    out
}
