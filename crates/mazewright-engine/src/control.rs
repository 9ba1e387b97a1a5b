//! Cross-thread pause/cancel signals and the observable run state.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Lifecycle of a driven run.
///
/// `Idle → Running → (Paused ⇄ Running) → Completed | Cancelled | Failed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Not started.
    Idle,
    /// Stepping.
    Running,
    /// Waiting for [`RunControl::resume`].
    Paused,
    /// Every process ran to its terminal step.
    Completed,
    /// Stopped by [`RunControl::cancel`].
    Cancelled,
    /// A single-process run failed.
    Failed,
}

impl RunState {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => RunState::Running,
            2 => RunState::Paused,
            3 => RunState::Completed,
            4 => RunState::Cancelled,
            5 => RunState::Failed,
            _ => RunState::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            RunState::Idle => 0,
            RunState::Running => 1,
            RunState::Paused => 2,
            RunState::Completed => 3,
            RunState::Cancelled => 4,
            RunState::Failed => 5,
        }
    }

    /// Whether the run has ended.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::Cancelled | RunState::Failed
        )
    }
}

/// Shared pause/cancel flags for one driver.
///
/// Clones share the same flags, so a clone can be handed to another
/// thread (a UI, a test) and used to steer a run in progress. Signals
/// are honoured at the next step boundary.
#[derive(Clone, Debug)]
pub struct RunControl {
    paused: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
    state: Arc<AtomicU8>,
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}

impl RunControl {
    /// Fresh, unpaused, uncancelled control in the `Idle` state.
    pub fn new() -> Self {
        Self {
            paused: Arc::new(AtomicBool::new(false)),
            cancelled: Arc::new(AtomicBool::new(false)),
            state: Arc::new(AtomicU8::new(RunState::Idle.as_u8())),
        }
    }

    /// Hold the run before its next step.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Let a paused run continue.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
    }

    /// Abandon the run at its next step boundary, paused or not.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Clear both flags and return to `Idle`, ready for another run.
    pub fn reset(&self) {
        self.paused.store(false, Ordering::Release);
        self.cancelled.store(false, Ordering::Release);
        self.set_state(RunState::Idle);
    }

    /// Whether the pause flag is set.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Whether the cancel flag is set.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Current lifecycle state as last published by the driver.
    pub fn state(&self) -> RunState {
        RunState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub(crate) fn set_state(&self, state: RunState) {
        self.state.store(state.as_u8(), Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_flags() {
        let a = RunControl::new();
        let b = a.clone();
        b.pause();
        assert!(a.is_paused());
        a.resume();
        assert!(!b.is_paused());
        b.cancel();
        assert!(a.is_cancelled());
    }

    #[test]
    fn reset_clears_everything() {
        let c = RunControl::new();
        c.pause();
        c.cancel();
        c.set_state(RunState::Cancelled);
        c.reset();
        assert!(!c.is_paused());
        assert!(!c.is_cancelled());
        assert_eq!(c.state(), RunState::Idle);
    }

    #[test]
    fn state_round_trips_through_atomic() {
        let c = RunControl::new();
        for s in [
            RunState::Idle,
            RunState::Running,
            RunState::Paused,
            RunState::Completed,
            RunState::Cancelled,
            RunState::Failed,
        ] {
            c.set_state(s);
            assert_eq!(c.state(), s);
        }
        assert!(RunState::Failed.is_terminal());
        assert!(!RunState::Paused.is_terminal());
    }
}
