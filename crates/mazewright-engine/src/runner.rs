//! Paced execution of a single process.

use crossbeam_channel::Sender;
use mazewright_core::{Coord, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::Process;

use crate::config::{ConfigError, PacingConfig};
use crate::control::{RunControl, RunState};
use crate::event::RunEvent;
use crate::lane::{Lane, LaneReport, Outcome, Scheduler};
use crate::metrics::RunMetrics;

/// Result of [`Runner::run`].
#[derive(Clone, Debug)]
pub struct RunReport {
    /// The process's final state.
    pub lane: LaneReport,
    /// Counters for the run.
    pub metrics: RunMetrics,
}

impl RunReport {
    /// Whether the process completed with a solution.
    pub fn is_solved(&self) -> bool {
        self.lane.is_solved()
    }

    /// How the process ended.
    pub fn outcome(&self) -> &Outcome {
        &self.lane.outcome
    }
}

/// Drives one process at a time with pause, resume, and cancel.
///
/// Runs execute on the calling thread. Steer them from elsewhere with a
/// clone of [`control`](Runner::control), and observe them through the
/// event channel set by [`with_events`](Runner::with_events).
///
/// The control is not reset between runs: after a cancel, call
/// [`RunControl::reset`] before the next run.
///
/// ```
/// use mazewright_core::{Coord, SearchAlgorithm};
/// use mazewright_engine::{PacingConfig, Runner};
/// use mazewright_grid::Grid;
///
/// let grid = Grid::new(7).unwrap();
/// let runner = Runner::new(PacingConfig::unpaced()).unwrap();
/// let report = runner
///     .run_search(SearchAlgorithm::Bfs, &grid, Coord::new(0, 0), Coord::new(6, 6))
///     .unwrap();
/// assert_eq!(report.lane.path_len(), Some(13));
/// ```
#[derive(Debug)]
pub struct Runner {
    pacing: PacingConfig,
    control: RunControl,
    events: Option<Sender<RunEvent>>,
}

impl Runner {
    /// A runner with its own control and no event channel.
    pub fn new(pacing: PacingConfig) -> Result<Self, ConfigError> {
        pacing.validate()?;
        Ok(Self {
            pacing,
            control: RunControl::new(),
            events: None,
        })
    }

    /// Share an existing control instead of a private one.
    pub fn with_control(mut self, control: RunControl) -> Self {
        self.control = control;
        self
    }

    /// Publish events into `tx`.
    pub fn with_events(mut self, tx: Sender<RunEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    /// The control steering this runner's runs.
    pub fn control(&self) -> &RunControl {
        &self.control
    }

    /// The pacing policy.
    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    /// Drive `process` until it completes, fails, or is cancelled.
    ///
    /// Failures, panics included, are reported in the outcome rather
    /// than propagated.
    pub fn run(&self, process: Box<dyn Process>) -> RunReport {
        let mut lanes = [Lane::new(0, process)];
        let metrics =
            Scheduler::new(&self.pacing, &self.control, self.events.clone()).run(&mut lanes, |_, _| {});
        let [lane] = lanes;
        let lane = lane.into_report();
        if matches!(lane.outcome, Outcome::Failed(_)) {
            self.control.set_state(RunState::Failed);
        }
        RunReport { lane, metrics }
    }

    /// Run `algorithm` on a copy of `grid`.
    pub fn run_search(
        &self,
        algorithm: SearchAlgorithm,
        grid: &Grid,
        start: Coord,
        end: Coord,
    ) -> Result<RunReport, ConfigError> {
        let process = mazewright_search::spawn(algorithm, grid.clone(), start, end)?;
        Ok(self.run(process))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_core::{CellKind, ProcessError};
    use mazewright_test_utils::{FailingProcess, ScriptedProcess};
    use std::time::Duration;

    fn runner() -> Runner {
        Runner::new(PacingConfig::unpaced()).unwrap()
    }

    #[test]
    fn invalid_pacing_rejected() {
        let pacing = PacingConfig {
            snapshot_every: 0,
            ..PacingConfig::default()
        };
        assert!(matches!(
            Runner::new(pacing),
            Err(ConfigError::InvalidPacing { .. })
        ));
    }

    #[test]
    fn completed_run_reports_path_and_state() {
        let r = runner();
        let grid = Grid::new(5).unwrap();
        let report = r
            .run_search(SearchAlgorithm::AStar, &grid, Coord::new(0, 0), Coord::new(4, 4))
            .unwrap();
        assert_eq!(report.outcome(), &Outcome::Completed);
        assert_eq!(report.lane.path_len(), Some(9));
        assert!(report.is_solved());
        assert_eq!(r.control().state(), RunState::Completed);
        assert_eq!(report.lane.grid.count(CellKind::Path), 7);
    }

    #[test]
    fn caller_grid_untouched() {
        let grid = Grid::new(5).unwrap();
        runner()
            .run_search(SearchAlgorithm::Bfs, &grid, Coord::new(0, 0), Coord::new(4, 4))
            .unwrap();
        assert_eq!(grid.count(CellKind::Empty), 25);
    }

    #[test]
    fn bad_endpoint_is_a_config_error() {
        let grid = Grid::new(5).unwrap();
        let err = runner()
            .run_search(SearchAlgorithm::Dfs, &grid, Coord::new(0, 0), Coord::new(9, 9))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Process(ProcessError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn failed_process_sets_failed_state() {
        let r = runner();
        let report = r.run(Box::new(FailingProcess::new("bad", 2)));
        assert!(matches!(report.outcome(), Outcome::Failed(_)));
        assert!(!report.is_solved());
        assert_eq!(r.control().state(), RunState::Failed);
    }

    #[test]
    fn cancelled_before_start_does_nothing() {
        let r = runner();
        r.control().cancel();
        let report = r.run(Box::new(ScriptedProcess::new("s", 10, None)));
        assert_eq!(report.outcome(), &Outcome::Cancelled);
        assert_eq!(report.lane.steps, 0);
        assert_eq!(report.lane.path, None);
        assert_eq!(r.control().state(), RunState::Cancelled);
    }

    #[test]
    fn events_arrive_in_order() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let r = runner().with_events(tx);
        r.run(Box::new(ScriptedProcess::new("s", 3, None)));
        let events: Vec<RunEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], RunEvent::Step { step: 1, .. }));
        assert!(matches!(events[2], RunEvent::Step { step: 3, .. }));
        assert!(matches!(events[3], RunEvent::Completed { steps: 3, .. }));
    }

    #[test]
    fn paced_run_takes_at_least_its_delays() {
        let pacing = PacingConfig {
            step_delay: Duration::from_millis(5),
            ..PacingConfig::unpaced()
        };
        let r = Runner::new(pacing).unwrap();
        let report = r.run(Box::new(ScriptedProcess::new("s", 4, None)));
        assert!(report.metrics.elapsed_us >= 20_000);
        assert_eq!(report.metrics.steps, 4);
    }
}
