//! Events published while a driver runs.
//!
//! Drivers push [`RunEvent`]s into an optional crossbeam channel. The
//! receiving side is free to go away: once a send fails the driver
//! stops publishing and carries on.

use crossbeam_channel::Sender;
use mazewright_core::{Path, ProcessError};
use mazewright_grid::Grid;

/// One observable moment of a run.
///
/// `lane` is the process's position in the driver's lane list (always
/// 0 for a single run); `name` is its [`Process::name`](mazewright_process::Process::name).
#[derive(Clone, Debug, PartialEq)]
pub enum RunEvent {
    /// A step landed; `grid` is the process's grid after it.
    Step {
        /// Lane index.
        lane: usize,
        /// Process name.
        name: String,
        /// Steps taken so far by this lane.
        step: u64,
        /// Grid snapshot.
        grid: Grid,
    },
    /// The lane reached its terminal step.
    Completed {
        /// Lane index.
        lane: usize,
        /// Process name.
        name: String,
        /// Non-terminal steps taken.
        steps: u64,
        /// Route result, if the process returns one.
        path: Option<Path>,
        /// Final grid.
        grid: Grid,
    },
    /// The lane was abandoned by a cancel signal.
    Cancelled {
        /// Lane index.
        lane: usize,
        /// Process name.
        name: String,
        /// Steps taken before the cancel.
        steps: u64,
    },
    /// The lane's process returned an error or panicked.
    Failed {
        /// Lane index.
        lane: usize,
        /// Process name.
        name: String,
        /// What went wrong.
        error: ProcessError,
    },
    /// A race picked its winner.
    Winner {
        /// Lane index.
        lane: usize,
        /// Process name.
        name: String,
    },
}

impl RunEvent {
    /// Lane the event belongs to.
    pub fn lane(&self) -> usize {
        match self {
            RunEvent::Step { lane, .. }
            | RunEvent::Completed { lane, .. }
            | RunEvent::Cancelled { lane, .. }
            | RunEvent::Failed { lane, .. }
            | RunEvent::Winner { lane, .. } => *lane,
        }
    }

    /// Whether this event ends its lane.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunEvent::Completed { .. } | RunEvent::Cancelled { .. } | RunEvent::Failed { .. }
        )
    }
}

/// Optional event channel that disconnects itself on the first failed send.
#[derive(Clone, Debug, Default)]
pub(crate) struct EventSink {
    tx: Option<Sender<RunEvent>>,
}

impl EventSink {
    pub(crate) fn new(tx: Option<Sender<RunEvent>>) -> Self {
        Self { tx }
    }

    /// Whether anyone is still listening. Lets callers skip building
    /// snapshots nobody will read.
    pub(crate) fn is_connected(&self) -> bool {
        self.tx.is_some()
    }

    /// Publish `event`. Returns whether it was delivered.
    pub(crate) fn emit(&mut self, event: RunEvent) -> bool {
        let Some(tx) = &self.tx else {
            return false;
        };
        if tx.send(event).is_err() {
            self.tx = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cancelled(lane: usize) -> RunEvent {
        RunEvent::Cancelled {
            lane,
            name: "BFS".into(),
            steps: 0,
        }
    }

    #[test]
    fn sink_delivers_while_connected() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut sink = EventSink::new(Some(tx));
        assert!(sink.emit(cancelled(2)));
        assert_eq!(rx.try_recv().unwrap().lane(), 2);
    }

    #[test]
    fn dropped_receiver_disconnects_sink() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut sink = EventSink::new(Some(tx));
        drop(rx);
        assert!(!sink.emit(cancelled(0)));
        assert!(!sink.is_connected());
        assert!(!sink.emit(cancelled(0)));
    }

    #[test]
    fn absent_channel_is_silent() {
        let mut sink = EventSink::default();
        assert!(!sink.is_connected());
        assert!(!sink.emit(cancelled(0)));
    }

    #[test]
    fn terminal_events() {
        assert!(cancelled(0).is_terminal());
        let w = RunEvent::Winner {
            lane: 1,
            name: "A*".into(),
        };
        assert!(!w.is_terminal());
        assert_eq!(w.lane(), 1);
    }
}
