//! Cooperative round-robin scheduling of stepwise processes.
//!
//! Every driver in this crate is built on [`Scheduler`]: each round it
//! steps every active lane once, then honours cancel and pause, then
//! publishes snapshots, then sleeps. Lanes never share a grid, so the
//! interleaving is free of data races by construction, and one lane's
//! error or panic only ends that lane.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use mazewright_core::{CellKind, Path, ProcessError};
use mazewright_grid::Grid;
use mazewright_process::{Process, Step};

use crate::config::PacingConfig;
use crate::control::{RunControl, RunState};
use crate::event::{EventSink, RunEvent};
use crate::metrics::RunMetrics;

/// How a lane ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The process reached its terminal step.
    Completed,
    /// A cancel signal abandoned the process; any result is discarded.
    Cancelled,
    /// The process returned an error or panicked.
    Failed(ProcessError),
}

/// Final state of one lane.
#[derive(Clone, Debug)]
pub struct LaneReport {
    /// Position in the driver's lane list.
    pub lane: usize,
    /// Process name.
    pub name: String,
    /// Non-terminal steps taken.
    pub steps: u64,
    /// How the lane ended.
    pub outcome: Outcome,
    /// Route result. Always `None` unless the lane completed.
    pub path: Option<Path>,
    /// The lane's grid when it stopped.
    pub grid: Grid,
    /// Whether the solution is marked in `grid` rather than in `path`.
    pub solution_in_grid: bool,
    /// Time from the start of the run to the lane's terminal step.
    pub finished_after: Option<Duration>,
}

impl LaneReport {
    /// Whether the lane completed with a solution: a route, or for
    /// grid-encoded processes at least one Path cell.
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Completed && self.path_len().is_some()
    }

    /// Length of the solution. For grid-encoded processes this is the
    /// number of Path cells, which excludes the Start/End markers.
    pub fn path_len(&self) -> Option<usize> {
        if let Some(path) = &self.path {
            return Some(path.len());
        }
        if self.solution_in_grid {
            let cells = self.grid.count(CellKind::Path);
            return (cells > 0).then_some(cells);
        }
        None
    }
}

enum Advance {
    Stepped,
    Finished,
    Failed,
}

/// A process plus the bookkeeping the scheduler keeps for it.
pub(crate) struct Lane {
    index: usize,
    name: String,
    process: Box<dyn Process>,
    steps: u64,
    outcome: Option<Outcome>,
    path: Option<Path>,
    finished_after: Option<Duration>,
}

impl Lane {
    pub(crate) fn new(index: usize, process: Box<dyn Process>) -> Self {
        Self {
            index,
            name: process.name().to_string(),
            process,
            steps: 0,
            outcome: None,
            path: None,
            finished_after: None,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn is_active(&self) -> bool {
        self.outcome.is_none()
    }

    pub(crate) fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub(crate) fn grid(&self) -> &Grid {
        self.process.grid()
    }

    pub(crate) fn finished_after(&self) -> Option<Duration> {
        self.finished_after
    }

    /// Completed with a route or, for grid-encoded processes, with at
    /// least one Path cell.
    pub(crate) fn is_solved(&self) -> bool {
        if self.outcome != Some(Outcome::Completed) {
            return false;
        }
        self.path.is_some()
            || (self.process.solution_in_grid() && self.process.grid().count(CellKind::Path) > 0)
    }

    fn advance(&mut self, started: Instant) -> Advance {
        let process = &mut self.process;
        let result = catch_unwind(AssertUnwindSafe(|| process.step()));
        let (outcome, advance) = match result {
            Ok(Ok(Step::Continue)) => {
                self.steps += 1;
                return Advance::Stepped;
            }
            Ok(Ok(Step::Done(path))) => {
                self.path = path;
                (Outcome::Completed, Advance::Finished)
            }
            Ok(Err(error)) => (Outcome::Failed(error), Advance::Failed),
            Err(payload) => {
                let error = ProcessError::Panicked {
                    name: self.name.clone(),
                    message: panic_message(payload.as_ref()),
                };
                (Outcome::Failed(error), Advance::Failed)
            }
        };
        self.outcome = Some(outcome);
        self.finished_after = Some(started.elapsed());
        advance
    }

    fn cancel(&mut self) {
        self.path = None;
        self.outcome = Some(Outcome::Cancelled);
    }

    pub(crate) fn into_report(self) -> LaneReport {
        let solution_in_grid = self.process.solution_in_grid();
        LaneReport {
            lane: self.index,
            name: self.name,
            steps: self.steps,
            outcome: self.outcome.unwrap_or(Outcome::Cancelled),
            path: self.path,
            grid: self.process.into_grid(),
            solution_in_grid,
            finished_after: self.finished_after,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Drives a set of lanes to completion under one pacing policy and one
/// control.
pub(crate) struct Scheduler<'a> {
    pacing: &'a PacingConfig,
    control: &'a RunControl,
    sink: EventSink,
    metrics: RunMetrics,
    started: Instant,
}

impl<'a> Scheduler<'a> {
    pub(crate) fn new(
        pacing: &'a PacingConfig,
        control: &'a RunControl,
        events: Option<Sender<RunEvent>>,
    ) -> Self {
        Self {
            pacing,
            control,
            sink: EventSink::new(events),
            metrics: RunMetrics::default(),
            started: Instant::now(),
        }
    }

    /// Run every lane until it completes, fails, or is cancelled.
    /// `on_finish` sees each lane as it completes, in completion order.
    pub(crate) fn run<F>(mut self, lanes: &mut [Lane], mut on_finish: F) -> RunMetrics
    where
        F: FnMut(&Lane, &mut EventSink),
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("schedule", lanes = lanes.len()).entered();

        self.started = Instant::now();
        self.control.set_state(RunState::Running);
        let every = u64::from(self.pacing.snapshot_every.max(1));
        let mut progressed = Vec::with_capacity(lanes.len());
        let mut cancelled = false;

        loop {
            if self.control.is_cancelled() {
                cancelled = true;
                break;
            }
            progressed.clear();
            for (i, lane) in lanes.iter_mut().enumerate() {
                if !lane.is_active() {
                    continue;
                }
                match lane.advance(self.started) {
                    Advance::Stepped => {
                        self.metrics.steps += 1;
                        progressed.push(i);
                    }
                    Advance::Finished => {
                        self.finished(lane);
                        on_finish(lane, &mut self.sink);
                    }
                    Advance::Failed => self.failed(lane),
                }
            }
            if !lanes.iter().any(Lane::is_active) {
                break;
            }
            if self.control.is_cancelled() || !self.hold() {
                cancelled = true;
                break;
            }

            let mut due = false;
            for &i in &progressed {
                let lane = &lanes[i];
                if lane.steps % every == 0 {
                    due = true;
                    self.publish(lane);
                }
            }
            pace(if due {
                self.pacing.step_delay
            } else {
                self.pacing.idle_delay()
            });
        }

        if cancelled {
            for lane in lanes.iter_mut().filter(|l| l.is_active()) {
                lane.cancel();
                #[cfg(feature = "tracing")]
                tracing::info!(lane = lane.index, name = %lane.name, steps = lane.steps, "lane cancelled");
                self.sink.emit(RunEvent::Cancelled {
                    lane: lane.index,
                    name: lane.name.clone(),
                    steps: lane.steps,
                });
            }
        }
        self.control.set_state(if cancelled {
            RunState::Cancelled
        } else {
            RunState::Completed
        });
        self.metrics.elapsed_us = self.started.elapsed().as_micros() as u64;
        self.metrics
    }

    /// Block while paused. Returns `false` if cancelled meanwhile.
    fn hold(&mut self) -> bool {
        if !self.control.is_paused() {
            return true;
        }
        self.control.set_state(RunState::Paused);
        let since = Instant::now();
        while self.control.is_paused() && !self.control.is_cancelled() {
            thread::sleep(self.pacing.pause_poll);
        }
        self.metrics.paused_us += since.elapsed().as_micros() as u64;
        self.control.set_state(RunState::Running);
        !self.control.is_cancelled()
    }

    fn publish(&mut self, lane: &Lane) {
        if !self.sink.is_connected() {
            return;
        }
        let delivered = self.sink.emit(RunEvent::Step {
            lane: lane.index,
            name: lane.name.clone(),
            step: lane.steps,
            grid: lane.grid().clone(),
        });
        if delivered {
            self.metrics.snapshots += 1;
        }
    }

    fn finished(&mut self, lane: &Lane) {
        #[cfg(feature = "tracing")]
        tracing::info!(lane = lane.index, name = %lane.name, steps = lane.steps, solved = lane.is_solved(), "lane completed");
        if !self.sink.is_connected() {
            return;
        }
        self.sink.emit(RunEvent::Completed {
            lane: lane.index,
            name: lane.name.clone(),
            steps: lane.steps,
            path: lane.path.clone(),
            grid: lane.grid().clone(),
        });
    }

    fn failed(&mut self, lane: &Lane) {
        let Some(Outcome::Failed(error)) = &lane.outcome else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::warn!(lane = lane.index, name = %lane.name, %error, "lane failed");
        self.sink.emit(RunEvent::Failed {
            lane: lane.index,
            name: lane.name.clone(),
            error: error.clone(),
        });
    }
}

fn pace(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_test_utils::{FailingProcess, PanickingProcess, ScriptedProcess};

    fn lanes(processes: Vec<Box<dyn Process>>) -> Vec<Lane> {
        processes
            .into_iter()
            .enumerate()
            .map(|(i, p)| Lane::new(i, p))
            .collect()
    }

    // ── Lane ───────────────────────────────────────────────────────

    #[test]
    fn lane_counts_continue_steps() {
        let mut lane = Lane::new(0, Box::new(ScriptedProcess::new("s", 3, None)));
        let t = Instant::now();
        for _ in 0..3 {
            assert!(matches!(lane.advance(t), Advance::Stepped));
        }
        assert!(matches!(lane.advance(t), Advance::Finished));
        assert_eq!(lane.steps, 3);
        assert_eq!(lane.outcome(), Some(&Outcome::Completed));
        assert!(lane.finished_after.is_some());
    }

    #[test]
    fn panic_becomes_failure() {
        let mut lane = Lane::new(0, Box::new(PanickingProcess::new("boom", 1)));
        let t = Instant::now();
        assert!(matches!(lane.advance(t), Advance::Stepped));
        assert!(matches!(lane.advance(t), Advance::Failed));
        match lane.outcome() {
            Some(Outcome::Failed(ProcessError::Panicked { name, message })) => {
                assert_eq!(name, "boom");
                assert!(message.contains("boom"), "{message}");
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn panic_message_handles_payload_kinds() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42u32), "non-string panic payload");
    }

    // ── Scheduler ──────────────────────────────────────────────────

    #[test]
    fn runs_every_lane_to_completion() {
        let pacing = PacingConfig::unpaced();
        let control = RunControl::new();
        let mut lanes = lanes(vec![
            Box::new(ScriptedProcess::new("a", 2, None)),
            Box::new(ScriptedProcess::new("b", 5, None)),
        ]);
        let mut order = Vec::new();
        let metrics = Scheduler::new(&pacing, &control, None)
            .run(&mut lanes, |lane, _| order.push(lane.index()));
        assert_eq!(order, vec![0, 1]);
        assert_eq!(metrics.steps, 7);
        assert_eq!(control.state(), RunState::Completed);
    }

    #[test]
    fn failure_does_not_stop_siblings() {
        let pacing = PacingConfig::unpaced();
        let control = RunControl::new();
        let mut lanes = lanes(vec![
            Box::new(FailingProcess::new("bad", 1)),
            Box::new(ScriptedProcess::new("good", 4, None)),
        ]);
        Scheduler::new(&pacing, &control, None).run(&mut lanes, |_, _| {});
        assert!(matches!(lanes[0].outcome(), Some(Outcome::Failed(_))));
        assert_eq!(lanes[1].outcome(), Some(&Outcome::Completed));
    }

    #[test]
    fn precancelled_run_cancels_every_lane() {
        let pacing = PacingConfig::unpaced();
        let control = RunControl::new();
        control.cancel();
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut lanes = lanes(vec![Box::new(ScriptedProcess::new("a", 2, None))]);
        let metrics = Scheduler::new(&pacing, &control, Some(tx)).run(&mut lanes, |_, _| {});
        assert_eq!(metrics.steps, 0);
        assert_eq!(lanes[0].outcome(), Some(&Outcome::Cancelled));
        assert_eq!(control.state(), RunState::Cancelled);
        assert!(matches!(rx.try_recv(), Ok(RunEvent::Cancelled { .. })));
    }

    #[test]
    fn snapshot_stride_thins_step_events() {
        let pacing = PacingConfig {
            snapshot_every: 3,
            ..PacingConfig::unpaced()
        };
        let control = RunControl::new();
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut lanes = lanes(vec![Box::new(ScriptedProcess::new("a", 7, None))]);
        let metrics = Scheduler::new(&pacing, &control, Some(tx)).run(&mut lanes, |_, _| {});
        let steps: Vec<u64> = rx
            .try_iter()
            .filter_map(|e| match e {
                RunEvent::Step { step, .. } => Some(step),
                _ => None,
            })
            .collect();
        assert_eq!(steps, vec![3, 6]);
        assert_eq!(metrics.snapshots, 2);
    }

    #[test]
    fn report_path_len_for_grid_encoded_lane() {
        let mut grid = Grid::new(3).unwrap();
        grid.set_cell(mazewright_core::Coord::new(1, 1), CellKind::Path);
        let report = LaneReport {
            lane: 0,
            name: "Dead-End Filling".into(),
            steps: 1,
            outcome: Outcome::Completed,
            path: None,
            grid,
            solution_in_grid: true,
            finished_after: None,
        };
        assert_eq!(report.path_len(), Some(1));
        assert!(report.is_solved());
    }
}
